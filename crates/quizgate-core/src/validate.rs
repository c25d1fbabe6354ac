//! Input validation for mutating operations.
//!
//! Stands in for the remote form schemas: malformed input is rejected here,
//! before any request is issued.

use crate::error::ValidationError;
use crate::service::{AddQuestions, ExportRequest, NewQuestion};

/// Upper bound on questions generated per request.
pub const MAX_BATCH: u32 = 25;

/// Upper bound on custom question text length, in characters.
pub const MAX_QUESTION_LEN: usize = 2000;

/// A custom question must have non-empty, bounded text.
pub fn validate_new_question(request: &NewQuestion) -> Result<(), ValidationError> {
    let text = request.question.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyQuestion);
    }
    let len = text.chars().count();
    if len > MAX_QUESTION_LEN {
        return Err(ValidationError::QuestionTooLong {
            len,
            max: MAX_QUESTION_LEN,
        });
    }
    Ok(())
}

/// The generate-more count must be a bounded positive integer.
pub fn validate_add_questions(request: &AddQuestions) -> Result<(), ValidationError> {
    if request.count == 0 {
        return Err(ValidationError::ZeroCount);
    }
    if request.count > MAX_BATCH {
        return Err(ValidationError::CountTooLarge {
            count: request.count,
            max: MAX_BATCH,
        });
    }
    Ok(())
}

/// The export destination must look like an email address.
pub fn validate_export(request: &ExportRequest) -> Result<(), ValidationError> {
    if !is_valid_email(request.email.trim()) {
        return Err(ValidationError::InvalidEmail(request.email.clone()));
    }
    Ok(())
}

/// Shape check only: `local@domain` with a dotted, non-empty domain. Real
/// deliverability is the form service's problem.
fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty() && !domain.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_text_must_be_non_empty() {
        let ok = NewQuestion {
            question: "Which keyword declares a constant?".into(),
        };
        assert!(validate_new_question(&ok).is_ok());

        for text in ["", "   ", "\n\t"] {
            let request = NewQuestion {
                question: text.into(),
            };
            assert_eq!(
                validate_new_question(&request),
                Err(ValidationError::EmptyQuestion)
            );
        }
    }

    #[test]
    fn question_text_is_bounded() {
        let request = NewQuestion {
            question: "x".repeat(MAX_QUESTION_LEN + 1),
        };
        assert!(matches!(
            validate_new_question(&request),
            Err(ValidationError::QuestionTooLong { .. })
        ));
    }

    #[test]
    fn count_must_be_positive_and_bounded() {
        assert!(validate_add_questions(&AddQuestions { count: 1 }).is_ok());
        assert!(validate_add_questions(&AddQuestions { count: MAX_BATCH }).is_ok());
        assert_eq!(
            validate_add_questions(&AddQuestions { count: 0 }),
            Err(ValidationError::ZeroCount)
        );
        assert_eq!(
            validate_add_questions(&AddQuestions {
                count: MAX_BATCH + 1
            }),
            Err(ValidationError::CountTooLarge {
                count: MAX_BATCH + 1,
                max: MAX_BATCH,
            })
        );
    }

    #[test]
    fn email_shapes() {
        for email in ["teacher@example.com", "a.b+c@sub.example.org"] {
            assert!(
                validate_export(&ExportRequest {
                    email: email.into()
                })
                .is_ok(),
                "{email} should validate"
            );
        }
        for email in [
            "",
            "no-at-sign",
            "@example.com",
            "user@",
            "user@nodot",
            "user@.com",
            "user@com.",
            "two words@example.com",
        ] {
            assert!(
                validate_export(&ExportRequest {
                    email: email.into()
                })
                .is_err(),
                "{email} should be rejected"
            );
        }
    }
}
