use crate::form::{Devices, FormRecord};

/// A record that passes every default rule
pub fn valid_form() -> FormRecord {
    FormRecord {
        nome: "Ateliê Aurora".to_string(),
        cnpj: "11.222.333/0001-81".to_string(),
        responsavel: "Marina Souza".to_string(),
        email: "contato@atelieaurora.com.br".to_string(),
        telefone: "(11) 91234-5678".to_string(),
        objetivo: "Vender peças artesanais online".to_string(),
        produtos: "Cerâmicas e luminárias".to_string(),
        estilo: "Minimalista".to_string(),
        ..Default::default()
    }
}

/// A record that passes every rule in the catalog
pub fn complete_form() -> FormRecord {
    FormRecord {
        variacoes: "40".to_string(),
        referencias: "https://example.com/inspiracao".to_string(),
        traducao: true,
        idiomas: "Português, Inglês".to_string(),
        plugin_traducao: "Weglot".to_string(),
        dispositivos: Devices {
            celular: true,
            tablet: false,
            computador: true,
        },
        acessibilidade: "Alto contraste".to_string(),
        tecnologia: "WordPress".to_string(),
        suporte: "6 meses".to_string(),
        prazo: "60 dias".to_string(),
        orcamento: "R$ 8.000".to_string(),
        ..valid_form()
    }
}
