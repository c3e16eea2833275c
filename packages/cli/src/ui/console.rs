//! Prompt input and console output.

use std::{fmt::Display, io::Write};

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::error::UiError;

/// Source of typed lines
pub trait Prompt {
    /// Show `message` and read one line.
    ///
    /// Returns `Ok(None)` when the user ends input (Ctrl-D / Ctrl-C).
    fn ask(&mut self, message: &str) -> Result<Option<String>, UiError>;
}

impl Prompt for DefaultEditor {
    fn ask(&mut self, message: &str) -> Result<Option<String>, UiError> {
        match self.readline(message) {
            Ok(line) => {
                if !line.trim().is_empty()
                    && let Err(e) = self.add_history_entry(line.as_str())
                {
                    tracing::debug!(error = %e, "history entry not recorded");
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Prompt and output used by the menu handlers
pub struct Console<'a> {
    prompt: &'a mut dyn Prompt,
    out: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(prompt: &'a mut dyn Prompt, out: &'a mut dyn Write) -> Self {
        Self { prompt, out }
    }

    /// Ask for a line, trimmed. `None` means input has ended.
    pub fn ask(&mut self, message: &str) -> Result<Option<String>, UiError> {
        self.out.flush()?;
        Ok(self
            .prompt
            .ask(message)?
            .map(|line| line.trim().to_string()))
    }

    /// Print one line
    pub fn say(&mut self, line: impl Display) -> Result<(), UiError> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    /// Hand the output to a writer function such as the menu printer
    pub fn write_with(
        &mut self,
        write: impl FnOnce(&mut dyn Write) -> std::io::Result<()>,
    ) -> Result<(), UiError> {
        write(&mut *self.out)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::{testing::ScriptedPrompt, *};

    #[test]
    fn test_console_ask_trims_answer() {
        // テスト項目: 入力された行は前後の空白が除去される
        // given (前提条件):
        let mut prompt = ScriptedPrompt::new(&["  NAB101 \t"]);
        let mut out = Vec::new();
        let mut console = Console::new(&mut prompt, &mut out);

        // when (操作):
        let answer = console.ask("Enter room id: ").unwrap();

        // then (期待する結果):
        assert_eq!(answer, Some("NAB101".to_string()));
    }

    #[test]
    fn test_console_ask_end_of_input() {
        // テスト項目: 入力が終了すると None が返される
        // given (前提条件):
        let mut prompt = ScriptedPrompt::new(&[]);
        let mut out = Vec::new();
        let mut console = Console::new(&mut prompt, &mut out);

        // then (期待する結果):
        assert_eq!(console.ask("Choose a number: ").unwrap(), None);
    }

    #[test]
    fn test_console_say_writes_line() {
        // テスト項目: say は 1 行を出力する
        // given (前提条件):
        let mut prompt = ScriptedPrompt::new(&[]);
        let mut out = Vec::new();

        // when (操作):
        {
            let mut console = Console::new(&mut prompt, &mut out);
            console.say("Room added: NAB101").unwrap();
        }

        // then (期待する結果):
        assert_eq!(String::from_utf8(out).unwrap(), "Room added: NAB101\n");
    }
}
