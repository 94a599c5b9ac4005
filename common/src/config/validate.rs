/// Checked on every config read and before every write.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
