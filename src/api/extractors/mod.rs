//! Request extractors that reject with `AppError`.

mod validated_json;
mod validated_path;
mod validated_query;

pub use validated_json::ValidatedJson;
pub use validated_path::ValidatedPath;
pub use validated_query::ValidatedQuery;

/// Format validation errors into a user-friendly string.
///
/// Fields sharing one message (e.g. "Email and Password are Required") are
/// reported once; output order is stable.
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let messages: std::collections::BTreeSet<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();

    messages.into_iter().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Credentials {
        #[validate(required(message = "Email and Password are Required"))]
        email: Option<String>,
        #[validate(required(message = "Email and Password are Required"))]
        password: Option<String>,
    }

    #[test]
    fn test_shared_message_reported_once() {
        let errors = Credentials {
            email: None,
            password: None,
        }
        .validate()
        .unwrap_err();

        assert_eq!(format_validation_errors(&errors), "Email and Password are Required");
    }

    #[test]
    fn test_unnamed_error_uses_field() {
        #[derive(Validate)]
        struct Sample {
            #[validate(range(min = 1))]
            user_id: i32,
        }

        let errors = Sample { user_id: 0 }.validate().unwrap_err();
        assert_eq!(format_validation_errors(&errors), "user_id is invalid");
    }
}
