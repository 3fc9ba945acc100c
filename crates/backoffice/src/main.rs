use backoffice::domain::{self, a106_marketing_scenario};
use backoffice::shared::config::{self, RenderFormat};
use backoffice::shared::page::{ListSettings, PageView};
use backoffice::shared::render::{render_json, render_text};
use backoffice::system;
use chrono::Local;
use contracts::shared::period::{PeriodSelection, PeriodToken};

fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config()?;
    let settings = ListSettings::from(&config);
    let now = Local::now().naive_local();

    let period = if config.render.period.trim().is_empty() {
        PeriodSelection::All
    } else {
        match config.render.period.parse::<PeriodToken>() {
            Ok(token) => PeriodSelection::preset(token),
            Err(e) => {
                tracing::warn!("{}, showing all dates", e);
                PeriodSelection::All
            }
        }
    };

    let views: Vec<PageView> = domain::all_pages()
        .iter()
        .map(|page| {
            let state = page
                .initial_state(&settings)
                .with_period(period.clone())
                .with_site(config.render.site_id)
                .with_search(&config.render.search);
            page.view(&state, &settings, now)
        })
        .collect();

    match config.render.format {
        RenderFormat::Json => println!("{}", render_json(&views)?),
        RenderFormat::Text => {
            for view in &views {
                println!("{}", render_text(view));
            }

            println!("== Email previews ==");
            for scenario in a106_marketing_scenario::mock::scenarios()
                .iter()
                .filter(|s| s.active)
            {
                for preview in a106_marketing_scenario::preview::previews(scenario, &config.utm, now) {
                    println!(
                        "[{}] to {}: {} | {}",
                        scenario.name,
                        preview.to,
                        preview.subject,
                        preview.link.as_deref().unwrap_or("(no link)")
                    );
                }
            }
        }
    }

    Ok(())
}
