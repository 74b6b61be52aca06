//! Offline seeding and suggestion commands.

use std::time::Duration;

use sea_orm::DatabaseConnection;
use tracing::{error, info, warn};

use terralux_console::suggest::persist_drafts;
use terralux_persistence::service::{building_model, vendor};
use terralux_suggest::ModelSuggester;

pub mod data;

/// Pause between vendors when drafting with the suggestion service,
/// to stay clear of upstream rate limits.
const SUGGEST_PACING: Duration = Duration::from_secs(2);

/// Populate the catalog with the fixed vendor roster and the
/// research-backed model listings. Vendors that already exist by
/// name are left untouched.
pub async fn run_seed(db: &DatabaseConnection, clear: bool) -> anyhow::Result<()> {
    if clear {
        building_model::delete_all(db).await?;
        vendor::delete_all(db).await?;
        info!("cleared existing vendors and models");
    }

    let mut vendors_created = 0;
    let mut models_created = 0;

    for seed in data::VENDORS {
        if vendor::find_by_name(db, seed.partner_name).await?.is_some() {
            warn!("vendor '{}' already exists, skipping", seed.partner_name);
            continue;
        }

        let created = vendor::create(db, seed.to_vendor_data()).await?;
        vendors_created += 1;
        info!("created vendor '{}' (id {})", created.partner_name, created.id);

        for model in data::models_for(seed.partner_name) {
            if let Some(inserted) =
                building_model::create_if_new(db, model.to_model_data(created.id)).await?
            {
                models_created += 1;
                info!(
                    "created model '{}' ({}) for vendor '{}'",
                    inserted.model_name, inserted.slug, created.partner_name
                );
            }
        }
    }

    info!(
        "seeding complete: {} vendors, {} models created",
        vendors_created, models_created
    );
    Ok(())
}

/// Populate the vendor roster and draft model listings for each new
/// vendor through the suggestion service. A failure drafting one
/// vendor's models never aborts the run.
pub async fn run_seed_ai(
    db: &DatabaseConnection,
    suggester: &dyn ModelSuggester,
    vendors_only: bool,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let mut vendors_created = 0;
    let mut models_created = 0;

    let roster: &[data::SeedVendor] = match limit {
        Some(n) => &data::VENDORS[..n.min(data::VENDORS.len())],
        None => data::VENDORS,
    };

    for seed in roster {
        if vendor::find_by_name(db, seed.partner_name).await?.is_some() {
            warn!("vendor '{}' already exists, skipping", seed.partner_name);
            continue;
        }

        let created = vendor::create(db, seed.to_vendor_data()).await?;
        vendors_created += 1;
        info!("created vendor '{}' (id {})", created.partner_name, created.id);

        if vendors_only || seed.website_url.is_empty() {
            continue;
        }

        let suggestions = suggester
            .suggest_models(seed.partner_name, seed.website_url)
            .await;
        if suggestions.is_empty() {
            warn!("no suggestions generated for '{}'", seed.partner_name);
        } else {
            match persist_drafts(db, &created, &suggestions).await {
                Ok((created_count, skipped)) => {
                    models_created += created_count;
                    info!(
                        "drafted {} models for '{}' ({} skipped)",
                        created_count, created.partner_name, skipped
                    );
                }
                Err(err) => {
                    error!(
                        "failed to persist drafts for '{}': {:#}",
                        created.partner_name, err
                    );
                }
            }
        }

        tokio::time::sleep(SUGGEST_PACING).await;
    }

    info!(
        "seeding complete: {} vendors, {} models created",
        vendors_created, models_created
    );
    Ok(())
}

/// Draft model listings for a single vendor and print them, optionally
/// persisting the drafts.
pub async fn run_suggest(
    db: &DatabaseConnection,
    suggester: &dyn ModelSuggester,
    vendor_id: i64,
    auto_create: bool,
) -> anyhow::Result<()> {
    let Some(found) = vendor::find_by_id(db, vendor_id).await? else {
        eprintln!("vendor with id {} not found", vendor_id);
        return Ok(());
    };

    let website = found.website_url.clone().unwrap_or_default();
    println!("Generating model suggestions for '{}'...", found.partner_name);

    let suggestions = suggester.suggest_models(&found.partner_name, &website).await;
    if suggestions.is_empty() {
        println!("No suggestions generated.");
        return Ok(());
    }

    for (index, suggestion) in suggestions.iter().enumerate() {
        println!("\n{}. {}", index + 1, suggestion.model_name);
        println!("   {}", suggestion.description);
        if !suggestion.price_range.is_empty() {
            println!("   Price range: {}", suggestion.price_range);
        }
        for (key, value) in &suggestion.specifications {
            println!("   {}: {}", key, value);
        }
    }

    if auto_create {
        let (created, skipped) = persist_drafts(db, &found, &suggestions).await?;
        println!("\nCreated {} models ({} skipped as duplicates).", created, skipped);
    } else {
        println!("\nRun again with --auto-create to persist these drafts.");
    }

    Ok(())
}
