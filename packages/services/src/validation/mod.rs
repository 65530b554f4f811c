pub mod field_validators;
pub mod form_validator;
pub mod identifiers;
pub mod input_validator;
pub mod rules;

// Re-export common types and functions
pub use form_validator::{validate_form, validate_form_value};
pub use identifiers::{
    classify_tax_id, validate_cnpj, validate_cpf, validate_email, validate_phone, TaxIdKind,
};
pub use input_validator::{ErrorMap, ErrorMapExt, InputValidator};
pub use rules::{PolicyError, Rule, RulePolicy};
