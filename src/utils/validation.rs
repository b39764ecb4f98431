pub trait Validate {
    fn validate(&self) -> anyhow::Result<()>;
}

pub fn validate_non_empty<T>(field_name: &str, values: &[T]) -> anyhow::Result<()> {
    anyhow::ensure!(!values.is_empty(), "{} must contain at least one value", field_name);
    Ok(())
}
