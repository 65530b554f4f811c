use std::collections::BTreeMap;

/// Field name to message, one entry per failing field. Empty means valid.
pub type ErrorMap = BTreeMap<String, String>;

pub trait InputValidator {
    fn validate(&self) -> Result<(), ErrorMap>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// Helper trait for building and reporting error maps
pub trait ErrorMapExt {
    fn add_error(&mut self, field: &str, message: &str);
    fn to_message(&self) -> String;
    fn into_result(self) -> Result<(), ErrorMap>;
}

impl ErrorMapExt for ErrorMap {
    fn add_error(&mut self, field: &str, message: &str) {
        self.insert(field.to_string(), message.to_string());
    }

    fn to_message(&self) -> String {
        self.values().cloned().collect::<Vec<String>>().join(", ")
    }

    fn into_result(self) -> Result<(), ErrorMap> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_map_helpers() {
        let mut errors = ErrorMap::new();
        assert!(errors.clone().into_result().is_ok());

        errors.add_error("telefone", "Telefone inválido");
        errors.add_error("email", "E-mail inválido");

        // Ordered by field name
        assert_eq!(errors.to_message(), "E-mail inválido, Telefone inválido");
        assert_eq!(errors.into_result().unwrap_err().len(), 2);
    }
}
