/// Flags recognized by the validated geometry constructors.
///
/// Passed by value; the default runs every validation and propagates
/// failures as [`crate::ValidationError`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstructorOptions {
    /// Bypass validation entirely. The resulting geometry may violate the
    /// documented invariants; predicates on it have unspecified results.
    pub skip_validations: bool,

    /// On a validation failure, produce the empty geometry of the attempted
    /// type instead of an error. Other error kinds still propagate.
    pub omit_invalid: bool,
}

impl ConstructorOptions {
    pub fn skip_validations() -> Self {
        ConstructorOptions {
            skip_validations: true,
            ..Default::default()
        }
    }

    pub fn omit_invalid() -> Self {
        ConstructorOptions {
            omit_invalid: true,
            ..Default::default()
        }
    }
}
