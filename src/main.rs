use anyhow::{bail, Context, Result};
use clap::Parser;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use picture_streamer_common::control::NETWORK_ERROR_MESSAGE;
use picture_streamer_common::types::PICTURE_ID_PREFIX;
use picture_streamer_common::ControlCommand;
use picture_streamer_viewer::{cli, config, download, store, transport, watch};
use cli::{Cli, Commands};
use config::Config;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use transport::HttpClient;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn confirm(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("確認入力に失敗しました")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load().context("設定の読み込みに失敗しました")?;
    let storage_path = Config::storage_path()?;

    match cli.command {
        Commands::Watch => {
            let origin = config.resolve_server(cli.server.as_deref())?;
            let client = HttpClient::new(origin)?;
            println!("📷 pstream - {} を監視中 (Ctrl-Cで終了)\n", client.origin().base_url());

            let client_store = store::open_client_store(&storage_path);
            watch::watch(&client, client_store, config.poll_config()).await?;
        }

        Commands::Pull { dir } => {
            let origin = config.resolve_server(cli.server.as_deref())?;
            let client = HttpClient::new(origin)?;
            let target = dir.unwrap_or_else(|| config.download_dir());
            let mut client_store = store::open_client_store(&storage_path);

            println!("⬇ 未ダウンロードの写真を取得中... ({})", target.display());
            let summary = download::pull_missing(&client, &mut client_store, &target)
                .await
                .context(NETWORK_ERROR_MESSAGE)?;

            println!("✔ {}枚ダウンロード / {}枚は取得済み", summary.downloaded.len(), summary.skipped);
            for (name, error) in &summary.failed {
                println!("  ✘ {}: {}", name, error);
            }
        }

        Commands::Download { name, dir } => {
            let origin = config.resolve_server(cli.server.as_deref())?;
            let client = HttpClient::new(origin)?;
            let target = dir.unwrap_or_else(|| config.download_dir());
            let mut client_store = store::open_client_store(&storage_path);

            let path = download::download_one(&client, &mut client_store, &name, &target).await?;
            println!("✔ 保存しました: {}", path.display());
        }

        Commands::Options { auto_scroll, direct_links } => {
            let mut client_store = store::open_client_store(&storage_path);
            if !client_store.is_available() {
                println!("⚠ ローカルストレージが使用できません（設定は保存されません）");
            }

            if let Some(switch) = auto_scroll {
                client_store.set_automatic_scrolling(switch.enabled());
            }
            if let Some(switch) = direct_links {
                client_store.set_use_direct_app_links(switch.enabled());
            }

            let options = client_store.options();
            println!("オプション:");
            println!("  自動スクロール: {}", if options.automatic_scrolling { "on" } else { "off" });
            println!("  直接アプリリンク: {}", if options.use_direct_app_links { "on" } else { "off" });
        }

        Commands::Downloaded => {
            let client_store = store::open_client_store(&storage_path);
            let downloaded = client_store.downloaded();
            if downloaded.is_empty() {
                println!("ダウンロード済みの写真はありません");
            } else {
                println!("ダウンロード済み: {}枚", downloaded.len());
                for id in downloaded.iter() {
                    println!("  {}", id.trim_start_matches(PICTURE_ID_PREFIX));
                }
            }
        }

        Commands::Clear { yes } => {
            let mut client_store = store::open_client_store(&storage_path);
            if !client_store.is_available() {
                bail!("ローカルストレージが使用できません: {}", storage_path.display());
            }
            if !confirm("オプションとダウンロード履歴を消去しますか？", yes)? {
                println!("キャンセルしました");
                return Ok(());
            }

            let reload = client_store.clear();
            // 次回起動時はデフォルト値から始まる
            tokio::time::sleep(reload.delay).await;
            println!("✔ ローカルストレージを消去しました");
        }

        Commands::Control { action, yes, wait } => {
            let origin = config.resolve_server(cli.server.as_deref())?;
            let client = HttpClient::new(origin)?;
            let command = ControlCommand::from(action);

            let prompt = format!("サーバー {} で {} を実行しますか？", client.origin().authority(), command.as_str());
            if !confirm(&prompt, yes)? {
                println!("キャンセルしました");
                return Ok(());
            }

            let response = match client.send_control(command).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::debug!(error = %e, "control request failed");
                    bail!(NETWORK_ERROR_MESSAGE);
                }
            };
            if response.is_error() {
                bail!(response.message());
            }
            println!("✔ {}", response.message());

            if let (true, Some(delay)) = (wait, response.dismiss_after()) {
                wait_with_spinner(delay).await;
                println!("✔ 完了しているはずです");
            }
        }

        Commands::Config { set_server, show } => {
            let mut config = config;

            if let Some(url) = set_server {
                config.set_server_url(url)?;
                println!("✔ 接続先を設定しました");
            }

            if show {
                println!("設定:");
                println!("  サーバー: {}", config.server_url);
                println!("  ポーリング間隔: {}ms / 失敗時 {}ms", config.short_poll_ms, config.long_poll_ms);
                println!("  保存先: {}", config.download_dir().display());
                println!("  ストレージ: {}", storage_path.display());
            }
        }
    }

    Ok(())
}

async fn wait_with_spinner(delay: Duration) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg} {elapsed}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("待機中...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    tokio::time::sleep(delay).await;
    spinner.finish_and_clear();
}
