//! Linguistic resources for Spanish text analysis.
//!
//! Provides the fixed stopword list, the rule-based lemmatizer, and the
//! academic vocabulary markers used by the rule engine. All resources are
//! fixed for a given release; swap them at the call site via the
//! [`Lemmatizer`](crate::text::Lemmatizer) and
//! [`StopwordSet`](crate::text::StopwordSet) traits.

pub mod academic;
pub mod lemmas;
pub mod stopwords;
