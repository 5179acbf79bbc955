use crate::parameter_set;

parameter_set! {
    /// Generic model selection shared by every technique.
    pub struct ModelParameters {
        subsystem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::Value;

    #[test]
    fn subsystem_is_an_untyped_parameter_without_default() {
        let params = ModelParameters::new();
        assert_eq!(params.len(), 1);
        let subsystem = params.subsystem();
        assert_eq!(subsystem.display_name(), "subsystem");
        assert_eq!(subsystem.declared_type(), None);
        assert_eq!(subsystem.default(), &Value::None);
        assert!(subsystem.choices().is_empty());
    }
}
