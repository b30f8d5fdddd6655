//! Login command.

use clap::Args;

use super::Context;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account name
    pub account: String,

    /// Password
    #[arg(long, env = "BANAN_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn login(ctx: &Context, args: &LoginArgs) -> anyhow::Result<()> {
    let user = ctx.api.auth().login(&args.account, &args.password).await?;
    let token = ctx.api.session().token().await.unwrap_or_default();

    match ctx.format {
        OutputFormat::Json => output::print_json(&serde_json::json!({
            "token": token,
            "user": user,
        })),
        OutputFormat::Text => {
            output::print_success(&format!("Đăng nhập thành công: {}", user.account_name));
            output::print_kv("Vai trò", &user.role);
            println!();
            println!("export BANAN_TOKEN={}", token);
        }
    }
    Ok(())
}
