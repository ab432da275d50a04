use crate::domain::Category;
use crate::domain::events::Event;
use crate::ui::renderer::UiCommand;
use tokio::io::{AsyncBufReadExt, BufReader, stdin};
use tokio::sync::mpsc::Sender;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{debug, instrument};

#[derive(Debug, PartialEq)]
enum Input {
    Category(Category),
    Command(UiCommand),
}

/// Turns stdin lines into category changes for the store and viewport
/// commands for the renderer. Returns on end of input.
#[instrument(skip_all)]
pub async fn read_commands(events: Sender<Event>, commands: Sender<UiCommand>) {
    let mut lines = LinesStream::new(BufReader::new(stdin()).lines());

    while let Some(Ok(line)) = lines.next().await {
        match parse(&line) {
            Some(Input::Category(category)) => {
                if events.send(Event::CategoryChanged(category)).await.is_err() {
                    break;
                }
            }
            Some(Input::Command(command)) => {
                if commands.send(command).await.is_err() {
                    break;
                }
            }
            None => debug!("Ignoring input '{}'", line.trim()),
        }
    }
}

fn parse(line: &str) -> Option<Input> {
    match line.trim().to_ascii_lowercase().as_str() {
        "t" | "toilets" => Some(Input::Category(Category::Toilets)),
        "w" | "water" => Some(Input::Category(Category::DrinkingWater)),
        "j" | "down" => Some(Input::Command(UiCommand::Scroll(1))),
        "k" | "up" => Some(Input::Command(UiCommand::Scroll(-1))),
        "q" | "quit" => Some(Input::Command(UiCommand::Quit)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("t", Input::Category(Category::Toilets))]
    #[case("toilets", Input::Category(Category::Toilets))]
    #[case("w", Input::Category(Category::DrinkingWater))]
    #[case("water", Input::Category(Category::DrinkingWater))]
    #[case("  W  ", Input::Category(Category::DrinkingWater))]
    #[case("j", Input::Command(UiCommand::Scroll(1)))]
    #[case("down", Input::Command(UiCommand::Scroll(1)))]
    #[case("k", Input::Command(UiCommand::Scroll(-1)))]
    #[case("up", Input::Command(UiCommand::Scroll(-1)))]
    #[case("q", Input::Command(UiCommand::Quit))]
    #[case("QUIT", Input::Command(UiCommand::Quit))]
    fn parses_a_command(#[case] line: &str, #[case] expected: Input) {
        assert_eq!(parse(line), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("x")]
    #[case("toilet")]
    fn ignores_unknown_input(#[case] line: &str) {
        assert_eq!(parse(line), None);
    }
}
