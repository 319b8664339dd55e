//! Output formatting for seeding progress and results

use colored::Colorize;

use crate::seed::SeedEvent;

pub mod json;

/// Receives progress events from the seeding run
pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: &SeedEvent);
}

/// Prints one line per event to stdout
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn report(&self, event: &SeedEvent) {
        println!("{}", render(event));
    }
}

/// Discards progress (used with `--format json`)
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn report(&self, _event: &SeedEvent) {}
}

/// Human-readable line for an event.
///
/// Some lines carry a leading or trailing newline to leave a blank line
/// between phases.
pub fn render(event: &SeedEvent) -> String {
    match event {
        SeedEvent::Started => format!("{}\n", "🌱 Populando CRM com dados de teste...".bold()),
        SeedEvent::CreatingCompany => "📝 Criando empresa...".to_string(),
        SeedEvent::CompanyCreated(id) => format!("✅ Empresa criada: {}\n", display_id(id)),
        SeedEvent::CreatingContact => "📝 Criando contato...".to_string(),
        SeedEvent::ContactCreated(id) => format!("✅ Contato criado: {}\n", display_id(id)),
        SeedEvent::CreatingDeals => "📝 Criando deals de teste...\n".to_string(),
        SeedEvent::DealCreated { number, title } => {
            format!("   {} Deal {}: {}", "✓".green(), number, title)
        }
        SeedEvent::Finished { created } => format!(
            "\n{}\n💰 Total em pipeline: {}\n",
            format!("🎉 Concluído! {} deals criados com sucesso!", created).bold(),
            crate::seed::dataset::PIPELINE_TOTAL_LABEL
        ),
    }
}

fn display_id(id: &Option<String>) -> &str {
    id.as_deref().unwrap_or("null")
}
