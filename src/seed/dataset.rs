//! Static demonstration dataset
//!
//! One company, one contact and a fixed ordered list of deals spread across the
//! default sales pipeline. Records are replayed in declaration order.

use serde::Serialize;

/// Currency code attached to every deal
pub const CURRENCY: &str = "BRL";

/// Pipeline every deal belongs to
pub const PIPELINE_ID: &str = "pipeline-default";

/// Pipeline total announced in the closing summary line.
///
/// Printed as-is; it does not match [`pipeline_value`].
pub const PIPELINE_TOTAL_LABEL: &str = "R$ 2.208.000";

/// Stages of the default pipeline, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    /// stage-new
    New,
    /// stage-contacted
    Contacted,
    /// stage-qualified
    Qualified,
    /// stage-proposal
    Proposal,
    /// stage-negotiation
    Negotiation,
    /// stage-closed-won
    ClosedWon,
    /// stage-closed-lost
    ClosedLost,
}

impl Stage {
    /// All stages in pipeline order.
    #[cfg(test)]
    pub const ALL: [Stage; 7] = [
        Stage::New,
        Stage::Contacted,
        Stage::Qualified,
        Stage::Proposal,
        Stage::Negotiation,
        Stage::ClosedWon,
        Stage::ClosedLost,
    ];

    /// Stage identifier as known by the CRM.
    pub fn id(&self) -> &'static str {
        match self {
            Stage::New => "stage-new",
            Stage::Contacted => "stage-contacted",
            Stage::Qualified => "stage-qualified",
            Stage::Proposal => "stage-proposal",
            Stage::Negotiation => "stage-negotiation",
            Stage::ClosedWon => "stage-closed-won",
            Stage::ClosedLost => "stage-closed-lost",
        }
    }
}

/// Company record, posted as-is to `companies`
#[derive(Debug, Clone, Serialize)]
pub struct CompanySeed {
    pub name: &'static str,
    pub sector: &'static str,
    pub size: &'static str,
    pub website: &'static str,
    pub phone: &'static str,
}

/// Contact record posted to `contacts` (the company reference is added later)
#[derive(Debug, Clone)]
pub struct ContactSeed {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub position: &'static str,
}

/// One deal row
#[derive(Debug, Clone)]
pub struct DealSeed {
    pub stage: Stage,
    pub title: &'static str,
    pub description: &'static str,
    pub value: u64,
    /// Win probability in percent
    pub probability: u8,
}

const fn deal(
    stage: Stage,
    title: &'static str,
    description: &'static str,
    value: u64,
    probability: u8,
) -> DealSeed {
    DealSeed {
        stage,
        title,
        description,
        value,
        probability,
    }
}

pub static COMPANY: CompanySeed = CompanySeed {
    name: "Empresa Teste ACME Corp",
    sector: "Tecnologia",
    size: "MEDIUM",
    website: "https://acme.example.com",
    phone: "(11) 98765-4321",
};

pub static CONTACT: ContactSeed = ContactSeed {
    first_name: "João",
    last_name: "Silva",
    email: "joao.silva@acme.example.com",
    phone: "(11) 98765-4321",
    position: "Diretor de TI",
};

#[rustfmt::skip]
pub static DEALS: [DealSeed; 20] = [
    // Novo Lead
    deal(Stage::New, "Venda de Licenças SaaS - Startup X", "Empresa interessada em 50 licenças", 25_000, 20),
    deal(Stage::New, "Implementação ERP - Indústria Y", "Projeto de implementação completa do ERP", 180_000, 15),
    deal(Stage::New, "Consultoria Digital - Varejo Z", "Consultoria de transformação digital", 45_000, 25),
    // Contato Realizado
    deal(Stage::Contacted, "CRM Customizado - Fintech A", "Desenvolvimento de CRM personalizado", 95_000, 35),
    deal(Stage::Contacted, "Migração Cloud - Empresa B", "Migração de infraestrutura para cloud", 120_000, 30),
    deal(Stage::Contacted, "Automação de Marketing - Empresa C", "Setup completo de automação", 35_000, 40),
    deal(Stage::Contacted, "Sistema de Gestão - Clínica D", "Sistema de gestão para clínicas", 78_000, 30),
    deal(Stage::Contacted, "E-commerce B2B - Distribuidora E", "Plataforma de vendas B2B", 150_000, 25),
    // Qualificado
    deal(Stage::Qualified, "Integração APIs - Fintech F", "Integração com sistemas bancários", 65_000, 50),
    deal(Stage::Qualified, "App Mobile - Startup G", "App iOS e Android", 110_000, 55),
    deal(Stage::Qualified, "BI e Analytics - Empresa H", "Dashboard executivo com BI", 48_000, 45),
    deal(Stage::Qualified, "Expansão de Licenças - Cliente I", "Expansão para 100 usuários", 85_000, 60),
    // Proposta Enviada
    deal(Stage::Proposal, "Sistema Logístico - Transportadora J", "Sistema de gestão de frotas", 195_000, 65),
    deal(Stage::Proposal, "Portal do Cliente - Empresa K", "Portal web B2B", 72_000, 70),
    deal(Stage::Proposal, "AI Chatbot - E-commerce L", "Chatbot com IA", 38_000, 60),
    // Em Negociação
    deal(Stage::Negotiation, "Migração Legacy - Banco M", "Modernização de sistema legado", 450_000, 75),
    deal(Stage::Negotiation, "Plataforma Educacional - Escola N", "EAD para 5000 alunos", 220_000, 80),
    // Ganho
    deal(Stage::ClosedWon, "Website Institucional - Empresa O", "Site + SEO + Hospedagem", 28_000, 100),
    deal(Stage::ClosedWon, "Sistema RH - Empresa P", "Sistema de gestão de RH", 65_000, 100),
    // Perdido
    deal(Stage::ClosedLost, "ERP Completo - Indústria Q", "Optaram por concorrente", 180_000, 0),
];

/// Sum of all deal values, lost deals included.
pub fn pipeline_value() -> u64 {
    DEALS.iter().map(|d| d.value).sum()
}
