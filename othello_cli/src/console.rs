use std::io::{BufRead, Write};

use othello::{Board, Player, PlayerId, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use tracing::trace;

use crate::config::GameConfig;

/// The text the player types to end the game.
pub const QUIT: &str = "quit";

/// Line-based conversation with the people at the keyboard.
///
/// Generic over the input and output so that games can be scripted.
pub struct Console<R, W> {
    input: R,
    output: W,
    // A re-usable buffer for reading lines.
    // Should always be empty before and after read_line().
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: Vec::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line, without surrounding whitespace. Bytes that aren't
    /// UTF-8 are replaced rather than rejected.
    ///
    /// Returns `None` at the end of the input.
    pub fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        self.output.flush()?;
        let num_bytes_read = self.input.read_until(b'\n', &mut self.buf)?;
        let line = String::from(String::from_utf8_lossy(&self.buf).trim());
        self.buf.clear();
        if num_bytes_read == 0 {
            return Ok(None);
        }
        trace!(name: "Read line", line = %line);
        Ok(Some(line))
    }

    pub fn welcome(&mut self) -> anyhow::Result<()> {
        writeln!(
            self,
            "Welcome to Othello! please pick your player names and board size below."
        )?;
        writeln!(self)?;
        Ok(())
    }

    /// Asks for a player's name. Nothing entered means the default name.
    pub fn player_name(&mut self, id: PlayerId) -> anyhow::Result<Player> {
        write!(
            self,
            "Type the {0} disc ({1}) player name [or <Enter> for '{0}']: ",
            id.colour(),
            id.symbol()
        )?;
        Ok(match self.read_line()? {
            Some(name) if !name.is_empty() => Player::new(id, name),
            _ => Player::with_default_name(id),
        })
    }

    /// Asks who moves first, as an index into `players`.
    ///
    /// Only the exact name of the second player picks them.
    pub fn first_player(&mut self, players: &[Player; 2]) -> anyhow::Result<usize> {
        write!(
            self,
            "Choose who will play first [or <Enter> for {}/{}/{}]: ",
            players[0].colour(),
            players[0].symbol(),
            players[0].name()
        )?;
        Ok(match self.read_line()? {
            Some(answer) if answer == players[1].name() => 1,
            _ => 0,
        })
    }

    /// Asks for the number of rows or columns.
    ///
    /// Anything that isn't a valid size falls back to the default.
    pub fn board_size(&mut self, direction: &str) -> anyhow::Result<usize> {
        write!(
            self,
            "Enter board {} ({}-{} and even) [or <Enter> for '{}']: ",
            direction,
            MIN_BOARD_SIZE,
            MAX_BOARD_SIZE,
            GameConfig::DEFAULT_SIZE
        )?;
        let answer = self.read_line()?.unwrap_or_default();
        match answer.parse::<i64>() {
            Ok(size) if usize::try_from(size).is_ok_and(Board::is_valid_size) => Ok(size as usize),
            Ok(_) => {
                writeln!(
                    self,
                    "Incorrect Format, default size({}) selected",
                    GameConfig::DEFAULT_SIZE
                )?;
                Ok(GameConfig::DEFAULT_SIZE)
            }
            Err(_) => Ok(GameConfig::DEFAULT_SIZE),
        }
    }

    /// Asks `player` for a move until they type something.
    ///
    /// Returns `None` at the end of the input.
    pub fn next_move(&mut self, player: &Player) -> anyhow::Result<Option<String>> {
        writeln!(self, "it's {}'s({}) turn", player.name(), player.symbol())?;
        writeln!(
            self,
            "Pick a cell by its row then column name (Ex. bc) to play there"
        )?;
        writeln!(
            self,
            "Use 'skip' to give up your turn. Use '{}' to end the game.",
            QUIT
        )?;
        write!(self, "Enter your choice:")?;
        loop {
            match self.read_line()? {
                Some(choice) if choice.is_empty() => {
                    write!(self, "Error: choice can not be empty, Try again:")?;
                }
                choice => return Ok(choice),
            }
        }
    }

    /// Waits for <Enter> after a rejected move. Returns `false` at the end of the input.
    pub fn acknowledge_rejection(&mut self) -> anyhow::Result<bool> {
        write!(self, " Your choice didn't work!")?;
        write!(self, " Press <Enter> to try again.")?;
        let line = self.read_line()?;
        writeln!(self)?;
        Ok(line.is_some())
    }
}

impl<R, W: Write> Write for Console<R, W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn output(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn read_line_trims_and_detects_eof() {
        let mut c = console("  bc \r\nskip");
        assert_eq!(c.read_line().unwrap().as_deref(), Some("bc"));
        assert_eq!(c.read_line().unwrap().as_deref(), Some("skip"));
        assert_eq!(c.read_line().unwrap(), None);
    }

    #[test]
    fn read_line_accepts_invalid_utf8() {
        let mut c = Console::new(&b"\xff\xfe\nquit\n"[..], Vec::new());
        assert_eq!(c.read_line().unwrap().as_deref(), Some("\u{FFFD}\u{FFFD}"));
        assert_eq!(c.read_line().unwrap().as_deref(), Some("quit"));
        assert_eq!(c.read_line().unwrap(), None);
    }

    #[test]
    fn player_names() {
        let mut c = console("Ada\n\n");
        assert_eq!(c.player_name(PlayerId::Black).unwrap().name(), "Ada");
        assert_eq!(c.player_name(PlayerId::White).unwrap().name(), "White");
        // End of input also means the default
        assert_eq!(c.player_name(PlayerId::Black).unwrap().name(), "Black");
        assert!(output(c).starts_with("Type the black disc (X) player name [or <Enter> for 'black']: "));
    }

    #[test]
    fn first_player() {
        let players = [
            Player::new(PlayerId::Black, "Ada"),
            Player::new(PlayerId::White, "Grace"),
        ];
        let mut c = console("Grace\nAda\n\nwhite\n");
        assert_eq!(c.first_player(&players).unwrap(), 1);
        assert_eq!(c.first_player(&players).unwrap(), 0);
        assert_eq!(c.first_player(&players).unwrap(), 0);
        assert_eq!(c.first_player(&players).unwrap(), 0);
        assert!(output(c).contains("[or <Enter> for black/X/Ada]"));
    }

    #[test]
    fn board_sizes() {
        let mut c = console("6\n\n3\n28\n-4\nten\n26\n");
        assert_eq!(c.board_size("rows").unwrap(), 6);
        assert_eq!(c.board_size("rows").unwrap(), 8);
        assert_eq!(c.board_size("rows").unwrap(), 8);
        assert_eq!(c.board_size("rows").unwrap(), 8);
        assert_eq!(c.board_size("rows").unwrap(), 8);
        assert_eq!(c.board_size("rows").unwrap(), 8);
        assert_eq!(c.board_size("columns").unwrap(), 26);
        let text = output(c);
        assert_eq!(
            text.matches("Incorrect Format, default size(8) selected").count(),
            3
        );
        assert!(text.contains("Enter board columns (4-26 and even) [or <Enter> for '8']: "));
    }

    #[test]
    fn empty_moves_are_asked_again() {
        let player = Player::with_default_name(PlayerId::White);
        let mut c = console("\n\ncd\n");
        assert_eq!(c.next_move(&player).unwrap().as_deref(), Some("cd"));
        assert_eq!(c.next_move(&player).unwrap(), None);
        let text = output(c);
        assert!(text.starts_with("it's White's(O) turn\n"));
        assert_eq!(
            text.matches("Error: choice can not be empty, Try again:").count(),
            2
        );
    }
}
