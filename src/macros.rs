//! macros used by e6model

/// implement [`crate::config::validate::Validate`] for a config struct whose fields are all
/// `Option`s, checking each listed field when it is set
///
/// # Examples
///
/// ```ignore
/// validator! { HttpCfg,
///     timeout_secs => |v: &u64| *v > 0,
///         "must be greater than 0";
/// }
/// ```
#[macro_export]
macro_rules! validator {
    ($struct_name:ty, $( $field:ident => $requirement:expr, $err_msg:expr );* $(;)? ) => {
        impl $crate::config::validate::Validate for $struct_name {
            fn validate(&self) -> ::std::result::Result<(), Vec<String>> {
                let mut errors: Vec<String> = Vec::new();

                $(
                    if let Some(ref value) = self.$field {
                        if !($requirement)(value) {
                            errors.push(format!("{}: {}", stringify!($field), $err_msg));
                        }
                    }
                )*

                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(errors)
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::config::validate::Validate;

    struct Limits {
        max: Option<u32>,
        name: Option<String>,
    }

    validator! { Limits,
        max => |v: &u32| *v <= 10,
            "must be at most 10";
        name => |v: &String| !v.is_empty(),
            "must not be empty";
    }

    #[test]
    fn test_validator_checks_set_fields() {
        let ok = Limits {
            max: Some(3),
            name: None,
        };
        assert!(ok.is_valid());

        let bad = Limits {
            max: Some(11),
            name: Some(String::new()),
        };
        assert_eq!(
            bad.validate().unwrap_err(),
            vec![
                "max: must be at most 10".to_string(),
                "name: must not be empty".to_string()
            ]
        );
    }
}
