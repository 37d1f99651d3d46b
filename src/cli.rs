use crate::config::Settings;
use crate::model::LogQuery;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "git-cal")]
#[command(about = "Calendar heatmap of git commit activity over the last year")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "Only count commits by this author")]
    pub author: Option<String>,

    #[arg(value_name = "PATH", help = "Only count commits touching these paths")]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let settings = Settings::from_env()?;
        let query = LogQuery {
            author: self.author,
            paths: self.paths,
        };
        crate::heat::exec(&settings, query)
    }
}
