// src/bin/manage_taxonomy.rs
//! Category and tag administration outside the HTTP surface.
//!
//! ```text
//! manage_taxonomy category add <name>
//! manage_taxonomy category list
//! manage_taxonomy tag add <name>
//! manage_taxonomy tag list
//! ```
use anyhow::{Context, Result, bail};
use quill_core::{
    application::commands::taxonomy::TaxonomyCommandService,
    domain::slug::UniqueSlugService,
    infrastructure::{
        database,
        repositories::{PostgresCategoryRepository, PostgresTagRepository},
        time::SystemClock,
        util::DefaultSlugGenerator,
    },
};
use std::{env, sync::Arc};

const USAGE: &str = "usage: manage_taxonomy <category|tag> <add <name>|list>";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args: Vec<String> = env::args().skip(1).collect();
    let (kind, action, rest) = match args.as_slice() {
        [kind, action, rest @ ..] => (kind.as_str(), action.as_str(), rest),
        _ => bail!(USAGE),
    };

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = database::init_pool(&database_url).await?;
    database::run_migrations(&pool).await?;

    let service = TaxonomyCommandService::new(
        Arc::new(PostgresCategoryRepository::new(pool.clone())),
        Arc::new(PostgresTagRepository::new(pool)),
        Arc::new(UniqueSlugService::new(Arc::new(DefaultSlugGenerator))),
        Arc::new(SystemClock),
    );

    match (kind, action) {
        ("category", "add") => {
            let category = service.create_category(&rest.join(" ")).await?;
            println!("created category {} ({})", category.name, category.slug);
        }
        ("category", "list") => {
            for category in service.list_categories().await? {
                println!("{}\t{}\t{}", category.id, category.slug, category.name);
            }
        }
        ("tag", "add") => {
            let tag = service.create_tag(&rest.join(" ")).await?;
            println!("created tag {} ({})", tag.name, tag.slug);
        }
        ("tag", "list") => {
            for tag in service.list_tags().await? {
                println!("{}\t{}\t{}", tag.id, tag.slug, tag.name);
            }
        }
        _ => bail!(USAGE),
    }

    Ok(())
}
