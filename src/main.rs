use clap::Parser;
use receipt_ai_rust::{cli, config, extractor};
use cli::{Cli, Commands};
use config::Config;
use extractor::ExtractionParams;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // エラー種別を問わず1行に集約して表示する（プロセスは落とさない設計だが、
    // CLIでは失敗を終了コードでも伝える）
    if let Err(e) = run(cli).await {
        eprintln!("An error occurred: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> receipt_ai_rust::error::Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { url, output } => {
            println!("🧾 receipt-ai - レシート解析\n");

            let params = ExtractionParams::from_config(&config)?;

            // 1. 抽出（1画像 = 1リクエスト）
            println!("[1/2] AI解析中...");
            let receipt = extractor::extract(&params, &url, cli.verbose).await?;
            println!("✔ {}件の明細を抽出\n", receipt.items.len());

            // 2. 検証済みReceiptのみをシリアライズして出力
            println!("[2/2] 結果を出力中...");
            let json = serde_json::to_string_pretty(&receipt)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &json)?;
                    println!("✔ 結果を保存: {}", path.display());
                }
                None => println!("{}", json),
            }

            println!("\n✅ 解析完了");
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  最大出力トークン: {}", config.max_tokens);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  APIキー: {}", if config.api_key.is_some() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}
