use clap::{Parser, Subcommand, ValueEnum};
use picture_streamer_common::ControlCommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pstream")]
#[command(about = "Picture Streamer 端末ビューア", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 接続先サーバー（例: http://192.168.0.10:8888/）
    #[arg(long, global = true)]
    pub server: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 新着写真を監視して表示（Ctrl-Cで終了）
    Watch,

    /// 未ダウンロードの写真をすべて取得
    Pull {
        /// 保存先フォルダ（省略時は設定値）
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// 写真を1枚ダウンロード
    Download {
        /// 画像ファイル名
        #[arg(required = true)]
        name: String,

        /// 保存先フォルダ（省略時は設定値）
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// 表示オプションを表示/変更
    Options {
        /// 自動スクロール
        #[arg(long)]
        auto_scroll: Option<Switch>,

        /// 直接アプリリンク
        #[arg(long)]
        direct_links: Option<Switch>,
    },

    /// ダウンロード済みの写真を一覧表示
    Downloaded,

    /// ローカルストレージ（オプション・ダウンロード履歴）を消去
    Clear {
        /// 確認をスキップ
        #[arg(short, long)]
        yes: bool,
    },

    /// サーバーを再起動/シャットダウン
    Control {
        #[arg(value_enum)]
        action: ControlAction,

        /// 確認をスキップ
        #[arg(short, long)]
        yes: bool,

        /// 処理完了の目安時間まで待機
        #[arg(long)]
        wait: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 接続先サーバーを設定
        #[arg(long)]
        set_server: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn enabled(&self) -> bool {
        matches!(self, Switch::On)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ControlAction {
    Reboot,
    Shutdown,
}

impl From<ControlAction> for ControlCommand {
    fn from(action: ControlAction) -> Self {
        match action {
            ControlAction::Reboot => ControlCommand::Reboot,
            ControlAction::Shutdown => ControlCommand::Shutdown,
        }
    }
}
