use async_graphql::InputObject;
use services::form::{Devices, FormRecord};

#[derive(InputObject, Default)]
pub struct DevicesInput {
    #[graphql(default)]
    pub celular: bool,
    #[graphql(default)]
    pub tablet: bool,
    #[graphql(default)]
    pub computador: bool,
}

/// Project requirements form. Every field is optional and defaults to empty or false.
#[derive(InputObject, Default)]
pub struct ProjectFormInput {
    #[graphql(default)]
    pub nome: String,
    #[graphql(default)]
    pub cnpj: String,
    #[graphql(default)]
    pub responsavel: String,
    #[graphql(default)]
    pub email: String,
    #[graphql(default)]
    pub telefone: String,
    #[graphql(default)]
    pub redes_sociais: String,
    #[graphql(default)]
    pub objetivo: String,
    #[graphql(default)]
    pub produtos: String,
    #[graphql(default)]
    pub variacoes: String,
    #[graphql(default)]
    pub pagamento_externo: String,
    #[graphql(default)]
    pub identidade_visual: bool,
    #[graphql(default)]
    pub referencias: String,
    #[graphql(default)]
    pub estilo: String,
    #[graphql(default)]
    pub carrinho: bool,
    #[graphql(default)]
    pub redirecionamento_pagamento: bool,
    #[graphql(default)]
    pub traducao: bool,
    #[graphql(default)]
    pub idiomas: String,
    #[graphql(default)]
    pub plugin_traducao: String,
    #[graphql(default)]
    pub formulario_contato: bool,
    #[graphql(default)]
    pub email_marketing: bool,
    #[graphql(default)]
    pub dispositivos: DevicesInput,
    #[graphql(default)]
    pub acessibilidade: String,
    #[graphql(default)]
    pub dominio: String,
    #[graphql(default)]
    pub hospedagem: String,
    #[graphql(default)]
    pub tecnologia: String,
    #[graphql(default)]
    pub manual: bool,
    #[graphql(default)]
    pub suporte: String,
    #[graphql(default)]
    pub auto_gerenciamento: bool,
    #[graphql(default)]
    pub prazo: String,
    #[graphql(default)]
    pub orcamento: String,
}

impl From<DevicesInput> for Devices {
    fn from(input: DevicesInput) -> Self {
        Devices {
            celular: input.celular,
            tablet: input.tablet,
            computador: input.computador,
        }
    }
}

impl From<ProjectFormInput> for FormRecord {
    fn from(input: ProjectFormInput) -> Self {
        FormRecord {
            nome: input.nome,
            cnpj: input.cnpj,
            responsavel: input.responsavel,
            email: input.email,
            telefone: input.telefone,
            redes_sociais: input.redes_sociais,
            objetivo: input.objetivo,
            produtos: input.produtos,
            variacoes: input.variacoes,
            pagamento_externo: input.pagamento_externo,
            identidade_visual: input.identidade_visual,
            referencias: input.referencias,
            estilo: input.estilo,
            carrinho: input.carrinho,
            redirecionamento_pagamento: input.redirecionamento_pagamento,
            traducao: input.traducao,
            idiomas: input.idiomas,
            plugin_traducao: input.plugin_traducao,
            formulario_contato: input.formulario_contato,
            email_marketing: input.email_marketing,
            dispositivos: input.dispositivos.into(),
            acessibilidade: input.acessibilidade,
            dominio: input.dominio,
            hospedagem: input.hospedagem,
            tecnologia: input.tecnologia,
            manual: input.manual,
            suporte: input.suporte,
            auto_gerenciamento: input.auto_gerenciamento,
            prazo: input.prazo,
            orcamento: input.orcamento,
        }
    }
}
