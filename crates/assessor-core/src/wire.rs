//! Wire-format mapping for the enum types.
//!
//! The backend transmits enums in an upper-snake-case wire form (`EXAM`,
//! `IN_PROGRESS`, `TRUE_FALSE`) distinct from the in-memory display form
//! (`Exam`, `In Progress`, `TrueFalse`). Each enum gets a single
//! bidirectional lookup table; unrecognized wire values fall back to a
//! default instead of failing, matching the backend contract.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::catalog::ContentKind;
use crate::model::{EvaluationStatus, EvaluationType, QuestionType};

/// Bidirectional enum<->wire table with a defaulting reverse lookup.
macro_rules! wire_table {
    ($ty:ty, $default:expr, [$(($variant:path, $wire:literal)),+ $(,)?]) => {
        impl $ty {
            const WIRE: &'static [($ty, &'static str)] = &[$(($variant, $wire)),+];

            /// The upper-snake-case form sent over the wire.
            pub fn to_wire(self) -> &'static str {
                Self::WIRE
                    .iter()
                    .find(|(v, _)| *v == self)
                    .map(|(_, w)| *w)
                    .unwrap_or_else(|| unreachable!("missing wire entry"))
            }

            /// Parse a wire value, case-insensitively. Unrecognized input
            /// falls back to the default rather than erroring.
            pub fn from_wire(s: &str) -> Self {
                let upper = s.to_uppercase();
                Self::WIRE
                    .iter()
                    .find(|(_, w)| *w == upper)
                    .map(|(v, _)| *v)
                    .unwrap_or($default)
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.to_wire())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok(Self::from_wire(&s))
            }
        }
    };
}

wire_table!(
    EvaluationType,
    EvaluationType::Quiz,
    [
        (EvaluationType::Quiz, "QUIZ"),
        (EvaluationType::Exam, "EXAM"),
        (EvaluationType::Assignment, "ASSIGNMENT"),
    ]
);

wire_table!(
    EvaluationStatus,
    EvaluationStatus::NotStarted,
    [
        (EvaluationStatus::NotStarted, "NOT_STARTED"),
        (EvaluationStatus::InProgress, "IN_PROGRESS"),
        (EvaluationStatus::Completed, "COMPLETED"),
    ]
);

wire_table!(
    QuestionType,
    QuestionType::Mcq,
    [
        (QuestionType::Mcq, "MCQ"),
        (QuestionType::TrueFalse, "TRUE_FALSE"),
        (QuestionType::ShortAnswer, "SHORT_ANSWER"),
    ]
);

wire_table!(
    ContentKind,
    ContentKind::Text,
    [
        (ContentKind::Text, "TEXT"),
        (ContentKind::Image, "IMAGE"),
        (ContentKind::Video, "VIDEO"),
    ]
);
