//! 交互式控制台

use std::io;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Lines};

use super::command::{Command, HELP};
use super::controller::MaterialsController;
use super::grid::render;
use super::prompt::Prompter;

const PROMPT: &str = "materials> ";

/// 行式控制台：从输入读取命令，把表格写到输出
pub struct Console<R, W> {
    lines: Lines<BufReader<R>>,
    out: W,
    color: bool,
}

impl<R, W> Console<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(input: R, out: W, color: bool) -> Self {
        Self {
            lines: BufReader::new(input).lines(),
            out,
            color,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// 命令循环，`quit` 或输入结束时返回
    pub async fn run(&mut self, controller: &mut MaterialsController) -> io::Result<()> {
        self.write_line(HELP).await?;
        self.show(controller).await?;

        loop {
            self.write(PROMPT).await?;
            let Some(line) = self.lines.next_line().await? else {
                break;
            };

            match Command::parse(&line) {
                Ok(Command::Empty) => continue,
                Ok(Command::Quit) => break,
                Ok(Command::Help) => {
                    self.write_line(HELP).await?;
                    continue;
                }
                Ok(Command::Load) => controller.load().await,
                Ok(Command::Search(term)) => controller.search(&term).await,
                Ok(Command::Select(position)) => {
                    controller.select(position);
                }
                Ok(Command::Delete) => controller.delete_selected(&mut *self).await?,
                Ok(Command::Add) => {
                    controller.add(&mut *self).await?;
                }
                Ok(Command::Status) => controller.status().await,
                Ok(Command::Clear) => controller.clear_messages(),
                Err(usage) => {
                    self.write_line(&usage).await?;
                    continue;
                }
            }

            self.show(controller).await?;
        }

        self.out.flush().await
    }

    async fn show(&mut self, controller: &MaterialsController) -> io::Result<()> {
        let grid = render(controller.view(), self.color);
        self.write(&grid).await
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await
    }

    async fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text).await?;
        self.write("\n").await
    }
}

#[async_trait]
impl<R, W> Prompter for Console<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn confirm(&mut self, question: &str) -> io::Result<bool> {
        self.write(&format!("{} [y/N] ", question)).await?;
        let answer = self.lines.next_line().await?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    async fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        self.write(&format!("{}: ", label)).await?;
        self.lines.next_line().await
    }
}
