use super::field_validators::FieldValidator;
use super::input_validator::{ErrorMap, ErrorMapExt, InputValidator};
use super::rules::{Rule, RulePolicy};
use crate::form::FormRecord;
use serde_json::Value;

fn apply_rule(rule: Rule, form: &FormRecord, errors: &mut ErrorMap) {
    let (field, message) = (rule.field(), rule.message());

    match rule {
        Rule::Nome => FieldValidator::validate_required_string(&form.nome, field, message, errors),
        Rule::TaxId => FieldValidator::validate_tax_id(&form.cnpj, field, message, errors),
        Rule::Responsavel => {
            FieldValidator::validate_required_string(&form.responsavel, field, message, errors)
        }
        Rule::Email => FieldValidator::validate_email(&form.email, field, message, errors),
        Rule::Telefone => FieldValidator::validate_phone(&form.telefone, field, message, errors),
        Rule::Objetivo => {
            FieldValidator::validate_required_string(&form.objetivo, field, message, errors)
        }
        Rule::Produtos => {
            FieldValidator::validate_required_string(&form.produtos, field, message, errors)
        }
        Rule::Variacoes => {
            FieldValidator::validate_required_string(&form.variacoes, field, message, errors)
        }
        Rule::Referencias => {
            FieldValidator::validate_required_string(&form.referencias, field, message, errors)
        }
        Rule::Estilo => FieldValidator::validate_required_string(&form.estilo, field, message, errors),
        Rule::PluginTraducao => FieldValidator::validate_required_when(
            form.traducao,
            &form.plugin_traducao,
            field,
            message,
            errors,
        ),
        Rule::Idiomas => FieldValidator::validate_required_string(&form.idiomas, field, message, errors),
        Rule::Acessibilidade => {
            FieldValidator::validate_required_string(&form.acessibilidade, field, message, errors)
        }
        Rule::Tecnologia => {
            FieldValidator::validate_required_string(&form.tecnologia, field, message, errors)
        }
        Rule::Suporte => FieldValidator::validate_required_string(&form.suporte, field, message, errors),
        Rule::Prazo => FieldValidator::validate_required_string(&form.prazo, field, message, errors),
        Rule::Orcamento => {
            FieldValidator::validate_required_string(&form.orcamento, field, message, errors)
        }
        Rule::Dispositivos => {
            FieldValidator::validate_devices(&form.dispositivos, field, message, errors)
        }
    }
}

/// Runs every active rule of `policy` against `form`.
///
/// Rules are independent: all of them run, and the returned map holds one
/// entry per failing rule. An empty map means the form can be submitted.
pub fn validate_form(form: &FormRecord, policy: &RulePolicy) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for rule in policy.rules() {
        apply_rule(rule, form, &mut errors);
    }

    errors
}

/// Same as [`validate_form`] for untyped JSON input; malformed fields count as empty.
pub fn validate_form_value(value: &Value, policy: &RulePolicy) -> ErrorMap {
    validate_form(&FormRecord::from_json(value), policy)
}

impl InputValidator for FormRecord {
    fn validate(&self) -> Result<(), ErrorMap> {
        validate_form(self, &RulePolicy::default()).into_result()
    }
}
