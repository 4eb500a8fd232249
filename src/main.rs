use std::env;

use anyhow::{Context, bail};
use dotenvy::dotenv;
use tracing::{info, warn};

use simpadu::config::Config;
use simpadu::logging;
use simpadu::screen::attendance::AttendanceLogScreen;
use simpadu::screen::dashboard::DashboardScreen;
use simpadu::screen::login::LoginScreen;
use simpadu::screen::LoadState;
use simpadu::utils::format::clock_label;
use simpadu::{AppContext, SessionError, StorageError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env().context("invalid configuration")?;
    let _guard = logging::init_tracing(&config.log_dir);

    info!(
        environment = %config.environment,
        base_url = %config.base_url,
        "SIMPADU client starting..."
    );

    let ctx = AppContext::from_config(config).context("failed to build HTTP client")?;

    let restored = match ctx.session.restore() {
        Ok(session) => session,
        Err(e @ (SessionError::Corrupt(_) | SessionError::Storage(StorageError::Corrupt(_)))) => {
            warn!(error = %e, "Discarding unreadable session");
            ctx.session.logout()?;
            None
        }
        Err(e) => return Err(e.into()),
    };

    if restored.is_none() {
        let mut login = LoginScreen::new();
        login.username = env::var("SIMPADU_USERNAME").unwrap_or_default();
        login.password = env::var("SIMPADU_PASSWORD").unwrap_or_default();
        if let Err(notice) = login.submit(&ctx).await {
            bail!("login failed: {}", notice.message);
        }
    }

    let mut dashboard = DashboardScreen::new(&ctx);
    println!("{}", clock_label(&chrono::Local::now()));
    println!("{} ({})", dashboard.display_name(), dashboard.jabatan());

    dashboard.load_schedule(&ctx).await;
    if let Some(placeholder) = dashboard.schedule_placeholder() {
        println!("{placeholder}");
    }
    if let LoadState::Loaded(classes) = &dashboard.schedule {
        for class in classes {
            println!(
                "- {} / Kelas: {} [{}]",
                class.nama_mk.as_deref().unwrap_or("-"),
                class.nama_kelas.as_deref().unwrap_or("-"),
                dashboard.class_button(class.id_kelas_mk).label()
            );
        }
    }

    let mut log = AttendanceLogScreen::new();
    log.load(&ctx).await;
    match &log.state {
        LoadState::Loaded(entries) => {
            println!("Log Presensi Masuk");
            for row in &entries.masuk {
                println!("  {} {} {}", row.tanggal, row.status, row.jam_masuk);
            }
            println!("Log Presensi Pulang");
            for row in &entries.pulang {
                println!("  {} {} {}", row.tanggal, row.status, row.jam_pulang);
            }
        }
        LoadState::Failed(message) => println!("{message}"),
        LoadState::Idle | LoadState::Loading => {}
    }

    Ok(())
}
