use std::io::Write;

use shorts_core::{
    AppConfig, AppConfigExt, Completion, OverlayContent, OverlayEvent, OverlayId, VideoSource,
    dashboard_panels, description_or_placeholder, scalar_stats,
};
use shorts_types::{CATEGORIES, COUNTRIES, Period, Video, is_known_category, is_known_country};

use crate::context::CliContext;
use crate::render;

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Issue the query for the current selection, if it changed, and print the outcome.
pub async fn refresh(ctx: &CliContext) -> Result<(), String> {
    let selection = ctx.selection.read().await.clone();
    let ticket = ctx.controller.lock().await.observe(&selection);
    let Some(ticket) = ticket else {
        return Ok(());
    };

    println!("Analyzing {} videos...", selection.categories_label());
    let outcome = ctx.source.fetch_videos(ticket.query()).await;
    let completion = ctx.controller.lock().await.complete(&ticket, outcome);

    if completion != Completion::Stale {
        let controller = ctx.controller.lock().await;
        print!("{}", render::view(&controller.view(), ctx.preview_limit()));
    }
    Ok(())
}

pub async fn toggle_category(ctx: &CliContext, name: &str) -> Result<(), String> {
    let name = name.trim().to_lowercase();
    if !is_known_category(&name) {
        return Err(format!("unknown category '{name}' (see `catalog`)\n"));
    }
    if !ctx.selection.write().await.toggle_category(&name) {
        println!("'{name}' is the only selected category and stays selected");
        return Ok(());
    }
    refresh(ctx).await
}

pub async fn toggle_country(ctx: &CliContext, code: &str) -> Result<(), String> {
    let code = code.trim().to_uppercase();
    if !is_known_country(&code) {
        return Err(format!("unknown country '{code}' (see `catalog`)\n"));
    }
    if !ctx.selection.write().await.toggle_country(&code) {
        println!("'{code}' is the only selected country and stays selected");
        return Ok(());
    }
    refresh(ctx).await
}

pub async fn set_period(ctx: &CliContext, key: &str) -> Result<(), String> {
    let period = Period::from_key(key.trim())
        .ok_or_else(|| format!("unknown period '{key}' (see `catalog`)\n"))?;
    if ctx.selection.write().await.set_period(period) {
        refresh(ctx).await?;
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Dashboard
// ─────────────────────────────────────────────────────────────────────────────

pub async fn show_status(ctx: &CliContext) -> Result<(), String> {
    print!("{}", render::selection(&*ctx.selection.read().await));
    let controller = ctx.controller.lock().await;
    print!("{}", render::view(&controller.view(), ctx.preview_limit()));
    Ok(())
}

pub async fn list_videos(ctx: &CliContext) -> Result<(), String> {
    let controller = ctx.controller.lock().await;
    let result = controller
        .result()
        .ok_or("no results loaded (see `status`)\n")?;
    if result.videos.is_empty() {
        println!("No videos for this selection");
        return Ok(());
    }
    print!("{}", render::videos(&result.videos));
    Ok(())
}

pub async fn show_panels(ctx: &CliContext) -> Result<(), String> {
    let controller = ctx.controller.lock().await;
    let result = controller
        .result()
        .ok_or("no results loaded (see `status`)\n")?;

    print!("{}", render::stats(&scalar_stats(&result.analysis)));
    for (i, panel) in dashboard_panels(&result.analysis, ctx.preview_limit())
        .iter()
        .enumerate()
    {
        println!();
        print!("{}", render::panel(i + 1, panel));
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Overlays
// ─────────────────────────────────────────────────────────────────────────────

/// Open the full list of a panel ("show more")
pub async fn show_more(ctx: &CliContext, number: usize) -> Result<(), String> {
    let panel = {
        let controller = ctx.controller.lock().await;
        let result = controller
            .result()
            .ok_or("no results loaded (see `status`)\n")?;
        number
            .checked_sub(1)
            .and_then(|i| dashboard_panels(&result.analysis, ctx.preview_limit()).into_iter().nth(i))
            .ok_or_else(|| format!("no panel {number} (see `panels`)\n"))?
    };

    let id = ctx
        .overlays
        .lock()
        .await
        .push(panel.title(), OverlayContent::PanelOverflow(panel));
    print_overlay(ctx, id).await
}

/// Open the drilldown for the channel of the n-th video and load it
pub async fn open_channel(ctx: &CliContext, number: usize) -> Result<(), String> {
    let video: Video = {
        let controller = ctx.controller.lock().await;
        let result = controller
            .result()
            .ok_or("no results loaded (see `status`)\n")?;
        number
            .checked_sub(1)
            .and_then(|i| result.videos.get(i))
            .cloned()
            .ok_or_else(|| format!("no video {number} (see `videos`)\n"))?
    };
    let channel_id = video
        .channel_key()
        .ok_or_else(|| format!("video {number} has no channel identifier\n"))?
        .to_string();

    let ticket = ctx
        .drilldowns
        .lock()
        .await
        .open(video.channel.clone(), channel_id);
    let id = ctx
        .overlays
        .lock()
        .await
        .push(video.channel.clone(), OverlayContent::Channel(ticket.id()));
    print_overlay(ctx, id).await?;

    let outcome = ctx.source.fetch_channel_videos(ticket.channel_id()).await;
    if ctx.drilldowns.lock().await.resolve(&ticket, outcome) {
        print_overlay(ctx, id).await?;
    }
    Ok(())
}

/// Open a nested overlay with the description of a drilldown row
pub async fn describe(ctx: &CliContext, drilldown: u64, row: usize) -> Result<(), String> {
    let (title, text) = {
        let drilldowns = ctx.drilldowns.lock().await;
        let d = drilldowns
            .get(drilldown)
            .ok_or_else(|| format!("no open drilldown {drilldown} (see `overlays`)\n"))?;
        let video = d
            .row(row)
            .ok_or_else(|| format!("drilldown {drilldown} has no row {row}\n"))?;
        (
            video.title.clone(),
            description_or_placeholder(video).to_string(),
        )
    };

    let id = ctx
        .overlays
        .lock()
        .await
        .push(title, OverlayContent::Description { text });
    print_overlay(ctx, id).await
}

pub async fn list_overlays(ctx: &CliContext) -> Result<(), String> {
    let overlays = ctx.overlays.lock().await;
    if overlays.is_empty() {
        println!("No open overlays");
        return Ok(());
    }

    let drilldowns = ctx.drilldowns.lock().await;
    let top = overlays.top().map(|o| o.id);
    for overlay in overlays.iter() {
        let marker = if Some(overlay.id) == top { "*" } else { " " };
        let kind = match &overlay.content {
            OverlayContent::PanelOverflow(_) => "list".to_string(),
            OverlayContent::Channel(id) => format!("channel, drilldown {id}"),
            OverlayContent::Description { .. } => "description".to_string(),
        };
        println!(
            "{marker} #{} {} ({kind})",
            overlay.id,
            render::overlay_title(overlay, &drilldowns)
        );
    }
    Ok(())
}

/// Close one overlay (the top one by default)
pub async fn close_overlay(ctx: &CliContext, id: Option<OverlayId>) -> Result<(), String> {
    let dismissed = {
        let mut overlays = ctx.overlays.lock().await;
        let id = id
            .or_else(|| overlays.top().map(|o| o.id))
            .ok_or("no open overlays\n")?;
        overlays
            .handle(id, OverlayEvent::CloseButton)
            .ok_or_else(|| format!("no overlay #{id} (see `overlays`)\n"))?
    };

    ctx.drilldowns
        .lock()
        .await
        .on_overlay_dismissed(&dismissed.content);
    println!("closed #{}", dismissed.id);
    Ok(())
}

async fn print_overlay(ctx: &CliContext, id: OverlayId) -> Result<(), String> {
    let overlays = ctx.overlays.lock().await;
    let overlay = overlays
        .get(id)
        .ok_or_else(|| format!("overlay #{id} is closed\n"))?;
    let drilldowns = ctx.drilldowns.lock().await;
    print!("{}", render::overlay(overlay, &drilldowns));
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Misc
// ─────────────────────────────────────────────────────────────────────────────

pub fn show_catalog() -> Result<(), String> {
    println!("Categories: {}", CATEGORIES.join(", "));
    println!("Countries:");
    for (code, name) in COUNTRIES {
        println!("  {code}  {name}");
    }
    println!("Periods:");
    for period in Period::all() {
        println!("  {:<7} {}", period.key(), period.label());
    }
    Ok(())
}

pub fn show_config(config: &AppConfig) -> Result<(), String> {
    match AppConfig::config_path() {
        Ok(path) => println!("Config file:    {}", path.display()),
        Err(err) => println!("Config file:    unavailable ({err})"),
    }
    println!("API base URL:   {}", config.api_base_url);
    println!("Preview limit:  {}", config.preview_limit);
    println!("Categories:     {}", config.default_categories.join(", "));
    println!("Countries:      {}", config.default_countries.join(", "));
    println!("Period:         {}", config.default_period.key());
    Ok(())
}

pub fn exit() -> Result<(), String> {
    write!(std::io::stdout(), "quitting...").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())
}
