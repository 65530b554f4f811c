use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Device targets the finished page must support
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Devices {
    pub celular: bool,
    pub tablet: bool,
    pub computador: bool,
}

impl Devices {
    fn from_json(value: Option<&Value>) -> Self {
        let Some(value) = value else {
            return Devices::default();
        };

        Devices {
            celular: toggle(value, "celular"),
            tablet: toggle(value, "tablet"),
            computador: toggle(value, "computador"),
        }
    }
}

/// One project-requirements submission.
///
/// Text fields default to `""` and toggles to `false`. On the wire every
/// field uses its camelCase name (`redesSociais`, `pluginTraducao`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormRecord {
    // General information
    pub nome: String,
    pub cnpj: String,
    pub responsavel: String,
    pub email: String,
    pub telefone: String,
    pub redes_sociais: String,

    // Project
    pub objetivo: String,
    pub produtos: String,
    pub variacoes: String,
    pub pagamento_externo: String,

    // Design and visual identity
    pub identidade_visual: bool,
    pub referencias: String,
    pub estilo: String,

    // Features
    pub carrinho: bool,
    pub redirecionamento_pagamento: bool,
    pub traducao: bool,
    pub idiomas: String,
    pub plugin_traducao: String,
    pub formulario_contato: bool,
    pub email_marketing: bool,

    // Responsiveness
    pub dispositivos: Devices,
    pub acessibilidade: String,

    // Hosting and domain
    pub dominio: String,
    pub hospedagem: String,
    pub tecnologia: String,

    // Delivery and support
    pub manual: bool,
    pub suporte: String,
    pub auto_gerenciamento: bool,

    // Schedule and budget
    pub prazo: String,
    pub orcamento: String,
}

fn text(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn toggle(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}

impl FormRecord {
    /// Builds a record from arbitrary JSON without ever failing.
    ///
    /// Missing, `null` or wrong-typed fields fall back to their defaults, and a
    /// non-object value yields the all-default record.
    pub fn from_json(value: &Value) -> Self {
        FormRecord {
            nome: text(value, "nome"),
            cnpj: text(value, "cnpj"),
            responsavel: text(value, "responsavel"),
            email: text(value, "email"),
            telefone: text(value, "telefone"),
            redes_sociais: text(value, "redesSociais"),
            objetivo: text(value, "objetivo"),
            produtos: text(value, "produtos"),
            variacoes: text(value, "variacoes"),
            pagamento_externo: text(value, "pagamentoExterno"),
            identidade_visual: toggle(value, "identidadeVisual"),
            referencias: text(value, "referencias"),
            estilo: text(value, "estilo"),
            carrinho: toggle(value, "carrinho"),
            redirecionamento_pagamento: toggle(value, "redirecionamentoPagamento"),
            traducao: toggle(value, "traducao"),
            idiomas: text(value, "idiomas"),
            plugin_traducao: text(value, "pluginTraducao"),
            formulario_contato: toggle(value, "formularioContato"),
            email_marketing: toggle(value, "emailMarketing"),
            dispositivos: Devices::from_json(value.get("dispositivos")),
            acessibilidade: text(value, "acessibilidade"),
            dominio: text(value, "dominio"),
            hospedagem: text(value, "hospedagem"),
            tecnologia: text(value, "tecnologia"),
            manual: toggle(value, "manual"),
            suporte: text(value, "suporte"),
            auto_gerenciamento: toggle(value, "autoGerenciamento"),
            prazo: text(value, "prazo"),
            orcamento: text(value, "orcamento"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_reads_wire_names() {
        let record = FormRecord::from_json(&json!({
            "nome": "Loja Azul",
            "redesSociais": "@lojaazul",
            "pluginTraducao": "GTranslate",
            "traducao": true,
            "dispositivos": { "celular": true }
        }));

        assert_eq!(record.nome, "Loja Azul");
        assert_eq!(record.redes_sociais, "@lojaazul");
        assert_eq!(record.plugin_traducao, "GTranslate");
        assert!(record.traducao);
        assert!(record.dispositivos.celular);
        assert!(!record.dispositivos.tablet);
    }

    #[test]
    fn test_from_json_wrong_shapes_fall_back_to_defaults() {
        let record = FormRecord::from_json(&json!({
            "nome": 42,
            "email": null,
            "carrinho": "yes",
            "dispositivos": [true, true, true]
        }));

        assert_eq!(record.nome, "");
        assert_eq!(record.email, "");
        assert!(!record.carrinho);
        assert_eq!(record.dispositivos, Devices::default());
    }

    #[test]
    fn test_from_json_non_object_is_default() {
        assert_eq!(FormRecord::from_json(&json!(null)), FormRecord::default());
        assert_eq!(FormRecord::from_json(&json!("nome")), FormRecord::default());
        assert_eq!(FormRecord::from_json(&json!([1, 2])), FormRecord::default());
    }

    #[test]
    fn test_serializes_with_camel_case_names() {
        let record = FormRecord {
            auto_gerenciamento: true,
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["autoGerenciamento"], json!(true));
        assert_eq!(value["dispositivos"]["computador"], json!(false));
        assert!(value.get("auto_gerenciamento").is_none());
    }

    #[test]
    fn test_deserialize_partial_record() {
        let record: FormRecord = serde_json::from_str(r#"{"nome":"Loja"}"#).unwrap();
        assert_eq!(record.nome, "Loja");
        assert_eq!(record.prazo, "");
    }
}
