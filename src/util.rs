//! Small array, random and file helpers for game code.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use rand::{seq::SliceRandom, Rng};

use crate::errors::Error;

/// Shuffle a slice in place
pub fn shuffle<T>(items: &mut [T]) {
    items.shuffle(&mut rand::thread_rng());
}

/// Pick a random element, None for an empty slice
pub fn pick<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::thread_rng())
}

/// Uniform value in [lo, hi), returns lo for an empty range
pub fn random_range(lo: f32, hi: f32) -> f32 {
    if lo >= hi {
        return lo;
    }
    rand::thread_rng().gen_range(lo..hi)
}

/// Uniform value in [-mag, mag]
pub fn random_signed(mag: f32) -> f32 {
    if mag <= 0.0 {
        return 0.0;
    }
    rand::thread_rng().gen_range(-mag..=mag)
}

/// Dump lines to a text file through a buffered writer.
/// I/O failures are logged and returned, never panicked on.
pub fn dump_text<P, I, S>(path: P, lines: I) -> Result<(), Error>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    match write_lines(path, lines) {
        Ok(()) => Ok(()),
        Err(err) => {
            log::error!("failed to write {}: {err}", path.display());
            Err(err.into())
        }
    }
}

fn write_lines<P, I, S>(path: P, lines: I) -> std::io::Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut items: Vec<u32> = (0..32).collect();
        shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<u32>>());
    }

    #[test]
    fn test_pick() {
        let empty: [u32; 0] = [];
        assert!(pick(&empty).is_none());
        assert_eq!(pick(&[7]), Some(&7));
    }

    #[test]
    fn test_random_range_bounds() {
        for _ in 0..100 {
            let v = random_range(2.0, 3.0);
            assert!((2.0..3.0).contains(&v));
        }
        assert_eq!(random_range(5.0, 5.0), 5.0);
        assert_eq!(random_signed(0.0), 0.0);
    }

    #[test]
    fn test_dump_text_roundtrip() {
        let path = std::env::temp_dir().join(format!("stagehand-dump-{}.txt", std::process::id()));
        dump_text(&path, ["score: 100", "lives: 3"]).expect("dump");
        let body = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(body, "score: 100\nlives: 3\n");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_dump_text_bad_path() {
        let missing = Path::new("/definitely/missing/dir/out.txt");
        assert!(dump_text(missing, ["x"]).is_err());
    }
}
