use super::{BASIS_SETS, QM_THEORIES};
use crate::core::value::{Value, ValueKind};
use crate::parameter_set;

parameter_set! {
    /// Quantum mechanics model parameters.
    pub struct QmModelParameters {
        theory
            .with_description("QM theory")
            .with_choices(QM_THEORIES.iter().copied()),
        multiplicity
            .with_description("Spin multiplicity")
            .with_default(1_i64)
            .with_type(ValueKind::Int),
        basis_set
            .with_description("Basis set")
            .with_choices(BASIS_SETS.iter().copied()),
        symmetry
            .with_default(Value::None)
            .with_choices([Value::None, Value::from("Auto"), Value::from("Loose")]),
        wfn_guess
            .with_description("Starting guess method:")
            .with_default("huckel")
            .with_choices(["huckel", "guess"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theory_and_basis_set_are_unconstrained_while_catalogs_are_empty() {
        let mut params = QmModelParameters::new();
        assert!(params.theory().choices().is_empty());
        assert!(params.basis_set().choices().is_empty());
        params.bind("theory", "rhf").unwrap();
        params.bind("basis_set", "6-31g*").unwrap();
    }

    #[test]
    fn multiplicity_is_an_integer_defaulting_to_singlet() {
        let mut params = QmModelParameters::new();
        assert_eq!(params.multiplicity().default(), &Value::Int(1));
        assert_eq!(params.multiplicity().value_kind(), Some(ValueKind::Int));
        assert!(params.bind("multiplicity", 2.5).is_err());
        params.bind("multiplicity", 3_i64).unwrap();
    }

    #[test]
    fn symmetry_falls_back_to_its_name_for_display() {
        let params = QmModelParameters::new();
        let symmetry = params.symmetry();
        assert_eq!(symmetry.display_name(), "symmetry");
        assert_eq!(symmetry.default(), &Value::None);
        assert_eq!(
            symmetry.choices(),
            &[Value::None, Value::from("Auto"), Value::from("Loose")]
        );
    }

    #[test]
    fn wfn_guess_defaults_to_huckel() {
        let params = QmModelParameters::new();
        assert_eq!(params.wfn_guess().display_name(), "Starting guess method:");
        assert_eq!(params.wfn_guess().default(), &Value::from("huckel"));
        assert!(params.wfn_guess().default_is_admissible());
    }
}
