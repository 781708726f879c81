// (C) 2020 Srimanta Barua <srimanta.barua1@gmail.com>

use std::io::{self, Read, Write};

use fnv::FnvHashMap;

use crate::{Error, Result};

/// The twelve COW instructions, with the language's opcode numbering.
/// `mOO` executes the current cell value as one of these opcodes.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    moo = 0,
    mOo = 1,
    moO = 2,
    mOO = 3,
    Moo = 4,
    MOo = 5,
    MoO = 6,
    MOO = 7,
    OOO = 8,
    MMM = 9,
    OOM = 10,
    oom = 11,
}

impl Command {
    fn from_code(code: &[u8]) -> Option<Command> {
        match code {
            b"moo" => Some(Command::moo),
            b"mOo" => Some(Command::mOo),
            b"moO" => Some(Command::moO),
            b"mOO" => Some(Command::mOO),
            b"Moo" => Some(Command::Moo),
            b"MOo" => Some(Command::MOo),
            b"MoO" => Some(Command::MoO),
            b"MOO" => Some(Command::MOO),
            b"OOO" => Some(Command::OOO),
            b"MMM" => Some(Command::MMM),
            b"OOM" => Some(Command::OOM),
            b"oom" => Some(Command::oom),
            _ => None,
        }
    }

    fn from_opcode(opcode: i64) -> Option<Command> {
        match opcode {
            0 => Some(Command::moo),
            1 => Some(Command::mOo),
            2 => Some(Command::moO),
            3 => Some(Command::mOO),
            4 => Some(Command::Moo),
            5 => Some(Command::MOo),
            6 => Some(Command::MoO),
            7 => Some(Command::MOO),
            8 => Some(Command::OOO),
            9 => Some(Command::MMM),
            10 => Some(Command::OOM),
            11 => Some(Command::oom),
            _ => None,
        }
    }
}

// Instruction words are picked out of 3-byte windows; everything else in
// the source is ignored.
fn parse(source: &str) -> Vec<Command> {
    let bytes = source.as_bytes();
    let mut commands = Vec::new();
    let mut i = 0;
    while i + 3 <= bytes.len() {
        if let Some(cmd) = Command::from_code(&bytes[i..i + 3]) {
            commands.push(cmd);
            i += 3;
        } else {
            i += 1;
        }
    }
    commands
}

// Match loop ends to starts. A start maps to the instruction after its
// end, an end maps back to its start.
fn build_loop_map(commands: &[Command]) -> Result<FnvHashMap<usize, usize>> {
    let mut map = FnvHashMap::default();
    let mut stack = Vec::new();
    for (i, cmd) in commands.iter().enumerate() {
        match cmd {
            Command::MOO => stack.push(i),
            Command::moo => {
                let start = stack.pop().ok_or(Error::UnmatchedLoopEnd(i))?;
                map.insert(start, i + 1);
                map.insert(i, start);
            }
            _ => {}
        }
    }
    if let Some(start) = stack.pop() {
        return Err(Error::UnmatchedLoopStart(start));
    }
    Ok(map)
}

/// A COW interpreter over generic input and output streams. The memory
/// tape is unbounded to the right; every cell starts at 0.
pub struct Interpreter<R: Read, W: Write> {
    input: R,
    output: W,
    memory: FnvHashMap<usize, i64>,
    ptr: usize,
    register: Option<i64>,
}

impl Interpreter<io::Empty, io::Sink> {
    pub fn new() -> Interpreter<io::Empty, io::Sink> {
        Interpreter::with_io(io::empty(), io::sink())
    }
}

impl<R: Read, W: Write> Interpreter<R, W> {
    pub fn with_io(input: R, output: W) -> Interpreter<R, W> {
        Interpreter {
            input,
            output,
            memory: FnvHashMap::default(),
            ptr: 0,
            register: None,
        }
    }

    pub fn memory_at(&self, cell: usize) -> i64 {
        self.memory.get(&cell).copied().unwrap_or(0)
    }

    pub fn ptr(&self) -> usize {
        self.ptr
    }

    /// Run a program from scratch. Tape, pointer and register are reset.
    pub fn run(&mut self, source: &str) -> Result<()> {
        self.ptr = 0;
        self.register = None;
        self.memory.clear();

        let commands = parse(source);
        if commands.is_empty() {
            return Ok(());
        }
        let loop_map = build_loop_map(&commands)?;

        let mut ip = 0;
        while ip < commands.len() {
            ip = self.execute(commands[ip], ip, &loop_map)?;
        }
        Ok(())
    }

    fn execute(
        &mut self,
        cmd: Command,
        ip: usize,
        loop_map: &FnvHashMap<usize, usize>,
    ) -> Result<usize> {
        let value = self.memory_at(self.ptr);
        match cmd {
            Command::MoO => {
                self.memory.insert(self.ptr, value + 1);
            }
            Command::MOo => {
                self.memory.insert(self.ptr, value - 1);
            }
            Command::moO => self.ptr += 1,
            Command::mOo => {
                if self.ptr == 0 {
                    return Err(Error::PointerUnderflow);
                }
                self.ptr -= 1;
            }
            Command::MOO => {
                if value == 0 {
                    return Ok(loop_map.get(&ip).copied().unwrap_or(ip + 1));
                }
            }
            Command::moo => {
                if value != 0 {
                    return Ok(loop_map.get(&ip).copied().unwrap_or(ip + 1));
                }
            }
            Command::OOM => write!(self.output, "{}", value)?,
            Command::oom => {
                let n = self.read_int()?;
                self.memory.insert(self.ptr, n);
            }
            Command::MMM => match self.register.take() {
                Some(stored) => {
                    self.memory.insert(self.ptr, stored);
                }
                None => self.register = Some(value),
            },
            Command::OOO => {
                self.memory.insert(self.ptr, 0);
            }
            Command::mOO => {
                // Loop commands and mOO itself cannot be run indirectly;
                // values that are not opcodes are ignored
                if let Some(target) = Command::from_opcode(value) {
                    if !matches!(target, Command::moo | Command::mOO | Command::MOO) {
                        return self.execute(target, ip, loop_map);
                    }
                }
            }
            Command::Moo => {
                if value == 0 {
                    let byte = self.read_byte()?;
                    self.memory
                        .insert(self.ptr, byte.map(i64::from).unwrap_or(0));
                } else if (0..=255).contains(&value) {
                    write!(self.output, "{}", value as u8 as char)?;
                }
            }
        }
        Ok(ip + 1)
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }
    }

    // Next whitespace-separated token, parsed as an integer. Unparseable
    // tokens and exhausted input read as 0.
    fn read_int(&mut self) -> Result<i64> {
        let mut token = Vec::new();
        loop {
            match self.read_byte()? {
                Some(b) if b.is_ascii_whitespace() => {
                    if token.is_empty() {
                        continue;
                    }
                    break;
                }
                Some(b) => token.push(b),
                None => break,
            }
        }
        Ok(String::from_utf8_lossy(&token).parse().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_and_decrement() {
        let mut interp = Interpreter::new();
        interp.run("MoO MoO MOo").unwrap();
        assert_eq!(interp.memory_at(0), 1);
    }

    #[test]
    fn move_pointer() {
        let mut interp = Interpreter::new();
        interp.run("moO MoO mOo MoO").unwrap();
        assert_eq!(interp.memory_at(1), 1);
        assert_eq!(interp.memory_at(0), 1);
        assert_eq!(interp.ptr(), 0);
    }

    #[test]
    fn zero_out_cell() {
        let mut interp = Interpreter::new();
        interp.run("MoO MoO OOO").unwrap();
        assert_eq!(interp.memory_at(0), 0);
    }

    #[test]
    fn loop_counts_down_to_zero() {
        let mut interp = Interpreter::new();
        interp.run("MoO MoO MOO MOo moo").unwrap();
        assert_eq!(interp.memory_at(0), 0);
    }

    #[test]
    fn loop_skipped_when_cell_is_zero() {
        let mut interp = Interpreter::new();
        interp.run("MOO MOo moo").unwrap();
        assert_eq!(interp.memory_at(0), 0);
    }

    #[test]
    fn output_integer() {
        let mut out = Vec::new();
        let mut interp = Interpreter::with_io(io::empty(), &mut out);
        interp.run("MoO OOM MoO OOM").unwrap();
        assert_eq!(out, b"12");
    }

    #[test]
    fn input_integer() {
        let mut interp = Interpreter::with_io("42 100".as_bytes(), io::sink());
        interp.run("oom moO oom").unwrap();
        assert_eq!(interp.memory_at(0), 42);
        assert_eq!(interp.memory_at(1), 100);
    }

    #[test]
    fn invalid_input_reads_as_zero() {
        let mut interp = Interpreter::with_io("not_a_number".as_bytes(), io::sink());
        interp.run("oom").unwrap();
        assert_eq!(interp.memory_at(0), 0);
    }

    #[test]
    fn exhausted_input_reads_as_zero() {
        let mut interp = Interpreter::with_io("7".as_bytes(), io::sink());
        interp.run("oom moO oom").unwrap();
        assert_eq!(interp.memory_at(0), 7);
        assert_eq!(interp.memory_at(1), 0);
    }

    #[test]
    fn moo_reads_byte_when_zero_prints_char_otherwise() {
        let mut out = Vec::new();
        let mut interp = Interpreter::with_io("A".as_bytes(), &mut out);
        interp.run("Moo Moo").unwrap();
        assert_eq!(interp.memory_at(0), 65);
        assert_eq!(out, b"A");
    }

    #[test]
    fn indirect_execution_from_opcode() {
        let mut interp = Interpreter::new();
        interp.run("MoO MoO MoO MoO MoO MoO mOO").unwrap();
        assert_eq!(interp.memory_at(0), 7);
    }

    #[test]
    fn indirect_execution_ignores_loop_opcodes() {
        let mut interp = Interpreter::new();
        interp.run("MoO MoO MoO MoO MoO MoO MoO mOO").unwrap();
        assert_eq!(interp.memory_at(0), 7);
    }

    #[test]
    fn ignores_non_command_text() {
        let mut interp = Interpreter::new();
        interp.run("Hello MoO World MoO !!!").unwrap();
        assert_eq!(interp.memory_at(0), 2);
    }

    #[test]
    fn pointer_underflow() {
        let mut interp = Interpreter::new();
        assert!(matches!(interp.run("mOo"), Err(Error::PointerUnderflow)));
    }

    #[test]
    fn empty_code() {
        let mut interp = Interpreter::new();
        interp.run("").unwrap();
        assert_eq!(interp.ptr(), 0);
    }

    #[test]
    fn register_copy_and_paste() {
        let mut interp = Interpreter::new();
        interp.run("MoO MoO MMM moO MMM").unwrap();
        assert_eq!(interp.memory_at(0), 2);
        assert_eq!(interp.memory_at(1), 2);
    }

    #[test]
    fn loaded_register_does_not_block_execution() {
        let mut interp = Interpreter::new();
        interp.run("MoO MMM MoO").unwrap();
        assert_eq!(interp.memory_at(0), 2);
    }

    #[test]
    fn unmatched_loop_errors() {
        let mut interp = Interpreter::new();
        assert!(matches!(
            interp.run("MOO MoO"),
            Err(Error::UnmatchedLoopStart(0))
        ));
        assert!(matches!(interp.run("moo"), Err(Error::UnmatchedLoopEnd(0))));
    }

    #[test]
    fn two_cell_addition() {
        let mut interp = Interpreter::new();
        let code = "MoO MoO moO MoO MoO MoO MOO mOo MoO moO MOo moo";
        interp.run(code).unwrap();
        assert_eq!(interp.memory_at(0), 5);
        assert_eq!(interp.memory_at(1), 0);
    }
}
