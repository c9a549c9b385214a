use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use admin::render;
use admin::shared::api_client::{ApiClient, ResourceService};
use admin::shared::config::{get_log_dir, load_config};
use admin::shared::detail_view::{load_detail, DetailOutcome};
use admin::shared::image_gallery::ImageGallery;
use admin::shared::list_pipeline::{ListPipeline, ListResource};
use admin::shared::notify::{CollectingNotifier, Severity};
use contracts::domain::common::ResourceId;
use contracts::shared::images::ImageOwner;

#[derive(Debug, Parser)]
#[command(name = "admin", version, about = "Travel back-office admin client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show one page of a resource list with its summary cards
    List {
        /// Resource key (see `admin resources`)
        resource: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Free-text search (sent to the server)
        #[arg(long)]
        search: Option<String>,
        /// Client-side filter `dimension=value`, repeatable
        #[arg(long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, String)>,
    },
    /// Show one record
    Show { resource: String, id: String },
    /// List the image gallery of a record, optionally changing the primary image
    Images {
        /// property, car, cruise, cruise_ship, airline or airport
        owner_kind: String,
        owner_id: String,
        #[arg(long)]
        set_primary: Option<String>,
    },
    /// List known resources
    Resources,
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected dimension=value, got `{}`", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty dimension in `{}`", raw));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config()?;
    admin::system::tracing::initialize(&get_log_dir(&config))?;
    config.log_sources();

    if let Command::Resources = cli.command {
        print!("{}", render::render_resources(&admin::domain::resources()));
        return Ok(());
    }

    let client = ApiClient::new(&config.api).context("Cannot create API client")?;
    let notifier = Arc::new(CollectingNotifier::new());

    let result = match cli.command {
        Command::List {
            resource,
            page,
            search,
            filters,
        } => admin::with_list_resource!(
            resource.as_str(),
            R => run_list::<R>(&client, notifier.clone(), page, search, filters).await,
            _ => Err(unknown_resource(&resource))
        ),
        Command::Show { resource, id } => admin::with_list_resource!(
            resource.as_str(),
            R => run_show::<R>(&client, notifier.as_ref(), &id).await,
            _ => Err(unknown_resource(&resource))
        ),
        Command::Images {
            owner_kind,
            owner_id,
            set_primary,
        } => run_images(&client, notifier.clone(), &owner_kind, &owner_id, set_primary).await,
        Command::Resources => Ok(()),
    };

    let notifications = notifier.drain();
    eprint!("{}", render::render_notifications(&notifications));
    result
}

fn unknown_resource(key: &str) -> anyhow::Error {
    anyhow::anyhow!("Unknown resource `{}`. Run `admin resources` for the list.", key)
}

async fn run_list<R: ListResource>(
    client: &ApiClient,
    notifier: Arc<CollectingNotifier>,
    page: u32,
    search: Option<String>,
    filters: Vec<(String, String)>,
) -> anyhow::Result<()> {
    let service: Arc<dyn ResourceService<R::Entity>> = Arc::new(client.resource::<R::Entity>(R::endpoint()));
    let pipeline = ListPipeline::<R>::new(service, notifier);

    for (key, value) in &filters {
        pipeline.set_filter(key, value.as_str())?;
    }

    if search.is_some() {
        pipeline.search(search.as_deref()).await;
    } else {
        pipeline.load().await;
    }
    if page > 1 {
        pipeline.go_to(page).await;
    }

    print!("{}", render::render_list::<R>(&pipeline.view()));
    Ok(())
}

async fn run_show<R: ListResource>(
    client: &ApiClient,
    notifier: &CollectingNotifier,
    id: &str,
) -> anyhow::Result<()> {
    let service = client.resource::<R::Entity>(R::endpoint());
    match load_detail::<R>(&service, notifier, id).await {
        DetailOutcome::Loaded(entity) => {
            print!("{}", render::render_detail::<R>(&entity));
            Ok(())
        }
        DetailOutcome::Redirect { route } => {
            println!("-> {}", route);
            bail!("Cannot load {} {}", R::KEY, id)
        }
    }
}

async fn run_images(
    client: &ApiClient,
    notifier: Arc<CollectingNotifier>,
    owner_kind: &str,
    owner_id: &str,
    set_primary: Option<String>,
) -> anyhow::Result<()> {
    let id = ResourceId::from_string(owner_id).map_err(anyhow::Error::msg)?;
    let owner = ImageOwner::from_kind(owner_kind, id)
        .with_context(|| format!("Unknown image owner kind `{}`", owner_kind))?;

    let mut gallery = ImageGallery::new(owner, Arc::new(client.images()), notifier.clone());
    if !gallery.load().await {
        bail!("Cannot load images of {} {}", owner_kind, owner_id);
    }

    if let Some(image_id) = set_primary {
        let image_id = ResourceId::from_string(&image_id).map_err(anyhow::Error::msg)?;
        gallery.set_primary(&image_id).await;
    }

    print!("{}", render::render_gallery(&gallery));
    if notifier.count(Severity::Error) > 0 {
        bail!("Image gallery update failed");
    }
    Ok(())
}
