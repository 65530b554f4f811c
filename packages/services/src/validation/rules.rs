use std::collections::BTreeSet;
use std::fmt;

/// Environment variable holding the active rule list
pub const RULES_ENV: &str = "INTAKE_RULES";

/// Every check the form validator knows about, keyed by the field it reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    Nome,
    TaxId,
    Responsavel,
    Email,
    Telefone,
    Objetivo,
    Produtos,
    Variacoes,
    Referencias,
    Estilo,
    PluginTraducao,
    Idiomas,
    Acessibilidade,
    Tecnologia,
    Suporte,
    Prazo,
    Orcamento,
    Dispositivos,
}

impl Rule {
    /// Catalog order, which is also the order rules are evaluated in
    pub const ALL: [Rule; 18] = [
        Rule::Nome,
        Rule::TaxId,
        Rule::Responsavel,
        Rule::Email,
        Rule::Telefone,
        Rule::Objetivo,
        Rule::Produtos,
        Rule::Variacoes,
        Rule::Referencias,
        Rule::Estilo,
        Rule::PluginTraducao,
        Rule::Idiomas,
        Rule::Acessibilidade,
        Rule::Tecnologia,
        Rule::Suporte,
        Rule::Prazo,
        Rule::Orcamento,
        Rule::Dispositivos,
    ];

    /// Field name the rule reports its error under
    pub fn field(&self) -> &'static str {
        match self {
            Rule::Nome => "nome",
            Rule::TaxId => "cnpj",
            Rule::Responsavel => "responsavel",
            Rule::Email => "email",
            Rule::Telefone => "telefone",
            Rule::Objetivo => "objetivo",
            Rule::Produtos => "produtos",
            Rule::Variacoes => "variacoes",
            Rule::Referencias => "referencias",
            Rule::Estilo => "estilo",
            Rule::PluginTraducao => "pluginTraducao",
            Rule::Idiomas => "idiomas",
            Rule::Acessibilidade => "acessibilidade",
            Rule::Tecnologia => "tecnologia",
            Rule::Suporte => "suporte",
            Rule::Prazo => "prazo",
            Rule::Orcamento => "orcamento",
            Rule::Dispositivos => "dispositivos",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rule::Nome => "Nome é obrigatório",
            Rule::TaxId => "CNPJ ou CPF inválido",
            Rule::Responsavel => "Responsável é obrigatório",
            Rule::Email => "E-mail inválido",
            Rule::Telefone => "Telefone inválido",
            Rule::Objetivo => "Objetivo é obrigatório",
            Rule::Produtos => "Produtos são obrigatórios",
            Rule::Variacoes => "Variações são obrigatórias",
            Rule::Referencias => "Referências são obrigatórias",
            Rule::Estilo => "Estilo é obrigatório",
            Rule::PluginTraducao => "Plugin de tradução é obrigatório",
            Rule::Idiomas => "Idiomas são obrigatórios",
            Rule::Acessibilidade => "Informe acessibilidade",
            Rule::Tecnologia => "Informe tecnologia",
            Rule::Suporte => "Informe suporte",
            Rule::Prazo => "Informe prazo",
            Rule::Orcamento => "Informe orçamento",
            Rule::Dispositivos => "Selecione ao menos um dispositivo",
        }
    }

    /// Whether the rule is part of the default policy
    pub fn active_by_default(&self) -> bool {
        matches!(
            self,
            Rule::Nome
                | Rule::TaxId
                | Rule::Responsavel
                | Rule::Email
                | Rule::Telefone
                | Rule::Objetivo
                | Rule::Produtos
                | Rule::Estilo
        )
    }

    pub fn from_field(field: &str) -> Option<Rule> {
        Rule::ALL.iter().copied().find(|rule| rule.field() == field)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyError {
    pub message: String,
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

/// The set of rules the form validator enforces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulePolicy {
    active: BTreeSet<Rule>,
}

impl Default for RulePolicy {
    fn default() -> Self {
        RulePolicy {
            active: Rule::ALL
                .iter()
                .copied()
                .filter(Rule::active_by_default)
                .collect(),
        }
    }
}

impl RulePolicy {
    pub fn all() -> Self {
        RulePolicy {
            active: Rule::ALL.iter().copied().collect(),
        }
    }

    pub fn none() -> Self {
        RulePolicy {
            active: BTreeSet::new(),
        }
    }

    pub fn enable(mut self, rule: Rule) -> Self {
        self.active.insert(rule);
        self
    }

    pub fn disable(mut self, rule: Rule) -> Self {
        self.active.remove(&rule);
        self
    }

    pub fn is_active(&self, rule: Rule) -> bool {
        self.active.contains(&rule)
    }

    /// Active rules in catalog order
    pub fn rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.active.iter().copied()
    }

    /// Parses a comma-separated rule list such as `"default,-telefone,prazo"`.
    ///
    /// Entries are field names, `default` or `all`. A leading `-` removes the
    /// rule (or set) instead of adding it. Entries apply left to right.
    pub fn parse(list: &str) -> Result<Self, PolicyError> {
        let mut policy = RulePolicy::none();

        for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (remove, name) = match entry.strip_prefix('-') {
                Some(name) => (true, name.trim()),
                None => (false, entry),
            };

            let rules: Vec<Rule> = match name {
                "all" => Rule::ALL.to_vec(),
                "default" => RulePolicy::default().rules().collect(),
                field => match Rule::from_field(field) {
                    Some(rule) => vec![rule],
                    None => {
                        return Err(PolicyError {
                            message: format!("Unknown validation rule: {}", field),
                        })
                    }
                },
            };

            for rule in rules {
                policy = if remove {
                    policy.disable(rule)
                } else {
                    policy.enable(rule)
                };
            }
        }

        Ok(policy)
    }

    /// Reads the policy from `INTAKE_RULES`, see [`RulePolicy::from_setting`].
    pub fn from_env() -> Self {
        RulePolicy::from_setting(std::env::var(RULES_ENV).ok().as_deref())
    }

    /// Builds the policy from a configured rule list, falling back to the
    /// default policy when the setting is missing, blank or invalid.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some(list) if !list.trim().is_empty() => match RulePolicy::parse(list) {
                Ok(policy) => policy,
                Err(e) => {
                    tracing::warn!(error = %e, "invalid {}, using default rules", RULES_ENV);
                    RulePolicy::default()
                }
            },
            _ => RulePolicy::default(),
        }
    }
}
