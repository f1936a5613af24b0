use strum::IntoEnumIterator;

/// Comma-separated list of every variant's canonical name, in declaration
/// order. Used to tell the user which answers are accepted.
pub fn valid_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str>,
{
    T::iter()
        .map(|v| v.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(", ")
}
