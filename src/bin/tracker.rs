use clap::Parser;
use crossterm::style::Stylize;
use tracing_subscriber::{fmt, EnvFilter};
use val_career_tracker::view::{MatchCard, Outcome, Profile, ViewState, RR_MAX};
use val_career_tracker::ProxyClient;

#[derive(Parser, Debug)]
#[command(version, about = "Look up a player's competitive rank and recent matches")]
struct Args {
    /// Player name (the part before the #)
    name: String,

    /// Player tag (the part after the #)
    tag: String,

    /// Account region: eu, na, ap, kr, latam, or br
    #[arg(long, default_value = "eu")]
    region: String,

    /// Base URL of the proxy service
    #[arg(long, env = "BACKEND_URL", default_value = "http://localhost:5000")]
    backend_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let client = ProxyClient::new(&args.backend_url, args.timeout_secs)?;

    println!(
        "Searching {}#{} ({})...",
        args.name, args.tag, args.region
    );

    let state = match client
        .load_player(&args.region, &args.name, &args.tag)
        .await
    {
        Ok(view) => ViewState::Ready(view),
        Err(e) => ViewState::fail(&e),
    };

    render(&state);
    Ok(())
}

fn render(state: &ViewState) {
    match state {
        ViewState::Idle | ViewState::Loading => {}
        ViewState::Failed(message) => println!("{}", message.clone().red()),
        ViewState::Ready(view) => {
            render_profile(&view.profile);
            render_history(&view.matches);
        }
    }
}

fn render_profile(profile: &Profile) {
    println!("\nRank: {}", profile.tier.clone().bold());

    let filled = (profile.ranking_in_tier.clamp(0, RR_MAX) * 20 / RR_MAX) as usize;
    println!(
        "[{}{}] {}/{} RR",
        "#".repeat(filled),
        "-".repeat(20 - filled),
        profile.ranking_in_tier,
        RR_MAX
    );

    if let Some(elo) = profile.elo {
        println!("ELO: {elo}");
    }
}

fn render_history(cards: &[MatchCard]) {
    if cards.is_empty() {
        println!("\nNo recent competitive games.");
        return;
    }

    println!("\nLast {} Competitive Games", cards.len());
    for card in cards {
        let delta = format!("{:+} RR", card.rr_delta);
        let delta = match card.outcome {
            Outcome::Win => delta.green(),
            Outcome::Loss => delta.red(),
            Outcome::Draw => delta.grey(),
        };

        let kda = match &card.stats {
            Some(stats) => format!("{}/{}/{}", stats.kills, stats.deaths, stats.assists),
            None => "stats unavailable".to_string(),
        };

        println!(
            "  {:<10} {:<16} {:<8} {} {}",
            card.map,
            card.tier,
            kda,
            delta,
            card.played_at.as_deref().unwrap_or(""),
        );
    }
}
