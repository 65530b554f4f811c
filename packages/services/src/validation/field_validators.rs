use super::identifiers::{validate_cnpj, validate_cpf, validate_email, validate_phone};
use super::input_validator::{ErrorMap, ErrorMapExt};
use crate::form::Devices;

pub struct FieldValidator;

impl FieldValidator {
    /// True when `value` has content after trimming surrounding whitespace
    pub fn required_text(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// True only for an explicit `true`; used for toggles that must be switched on
    pub fn required_boolean(value: bool) -> bool {
        value
    }

    pub fn any_device_selected(devices: &Devices) -> bool {
        devices.celular || devices.tablet || devices.computador
    }

    pub fn validate_required_string(
        value: &str,
        field_name: &str,
        message: &str,
        errors: &mut ErrorMap,
    ) {
        if !Self::required_text(value) {
            errors.add_error(field_name, message);
        }
    }

    /// Accepts either a CNPJ or a CPF in the same field
    pub fn validate_tax_id(value: &str, field_name: &str, message: &str, errors: &mut ErrorMap) {
        if !validate_cnpj(value) && !validate_cpf(value) {
            errors.add_error(field_name, message);
        }
    }

    pub fn validate_email(value: &str, field_name: &str, message: &str, errors: &mut ErrorMap) {
        if !validate_email(value) {
            errors.add_error(field_name, message);
        }
    }

    pub fn validate_phone(value: &str, field_name: &str, message: &str, errors: &mut ErrorMap) {
        if !validate_phone(value) {
            errors.add_error(field_name, message);
        }
    }

    /// Requires `value` only while `toggle` is switched on
    pub fn validate_required_when(
        toggle: bool,
        value: &str,
        field_name: &str,
        message: &str,
        errors: &mut ErrorMap,
    ) {
        if Self::required_boolean(toggle) && !Self::required_text(value) {
            errors.add_error(field_name, message);
        }
    }

    pub fn validate_devices(
        devices: &Devices,
        field_name: &str,
        message: &str,
        errors: &mut ErrorMap,
    ) {
        if !Self::any_device_selected(devices) {
            errors.add_error(field_name, message);
        }
    }
}
