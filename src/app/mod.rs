use crate::adapters::{build_client, HeadHunterClient, SuperJobClient};
use crate::config::Settings;
use crate::core::engine::StatisticsEngine;
use crate::core::table::render_table;
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use std::io::Write;

/// SuperJob 先、HeadHunter 後，兩張表之間空一行
pub async fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<()> {
    let client = build_client(&settings.http)?;

    // 兩個來源都先建好，缺少金鑰時不會發出任何請求
    let superjob = StatisticsEngine::new(SuperJobClient::new(
        client.clone(),
        settings.superjob.clone(),
    )?);
    let headhunter = StatisticsEngine::new(HeadHunterClient::new(
        client,
        settings.headhunter.clone(),
    ));

    write_report(&superjob, &settings.languages, out).await?;
    writeln!(out)?;
    write_report(&headhunter, &settings.languages, out).await?;

    Ok(())
}

async fn write_report<S: VacancySource, W: Write>(
    engine: &StatisticsEngine<S>,
    languages: &[String],
    out: &mut W,
) -> Result<()> {
    tracing::info!(
        "Collecting {} for {} languages",
        engine.title(),
        languages.len()
    );

    let table = engine.collect(languages).await?;
    writeln!(out, "{}", render_table(&table, engine.title()))?;
    out.flush()?;

    Ok(())
}
