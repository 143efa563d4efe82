//! Loading a [`WorldConfig`] from disk and from the command line.

use std::fs;
use std::path::Path;

use gridwalk_core::{Coord, WorldConfig};

use crate::DemoError;

/// Read a world description from a JSON file.
///
/// Missing fields fall back to [`WorldConfig::default`]. The result is not
/// validated; call [`WorldConfig::validate`] or [`crate::plan`].
pub fn load_world(path: &Path) -> Result<WorldConfig, DemoError> {
    let text = fs::read_to_string(path).map_err(|source| DemoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: WorldConfig = serde_json::from_str(&text).map_err(|source| DemoError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "loaded {}x{} world from {}",
        cfg.rows,
        cfg.cols,
        path.display()
    );
    Ok(cfg)
}

/// Replace the endpoints of `cfg` with any that were given explicitly.
pub fn apply_overrides(cfg: &mut WorldConfig, start: Option<Coord>, target: Option<Coord>) {
    if let Some(s) = start {
        cfg.start = s;
    }
    if let Some(t) = target {
        cfg.target = t;
    }
}

/// Parse a `ROW,COL` pair, e.g. `"4,4"`. Whitespace around numbers is
/// allowed.
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad row {row:?}: {e}"))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad column {col:?}: {e}"))?;
    Ok(Coord::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_coord_accepts_pairs() {
        assert_eq!(parse_coord("4,4"), Ok(Coord::new(4, 4)));
        assert_eq!(parse_coord(" 2 , -1 "), Ok(Coord::new(2, -1)));
    }

    #[test]
    fn parse_coord_rejects_garbage() {
        assert!(parse_coord("44").is_err());
        assert!(parse_coord("a,1").is_err());
        assert!(parse_coord("1,").is_err());
    }

    #[test]
    fn overrides_replace_endpoints() {
        let mut cfg = WorldConfig::default();
        apply_overrides(&mut cfg, Some(Coord::new(2, 2)), None);
        assert_eq!(cfg.start, Coord::new(2, 2));
        assert_eq!(cfg.target, Coord::new(4, 4));
        apply_overrides(&mut cfg, None, Some(Coord::new(0, 4)));
        assert_eq!(cfg.target, Coord::new(0, 4));
    }

    #[test]
    fn load_world_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"{{"rows": 3, "cols": 3, "blocked": [{{"row": 1, "col": 1}}],
                "target": {{"row": 2, "col": 2}}}}"#
        )
        .unwrap();
        let cfg = load_world(f.path()).unwrap();
        assert_eq!(cfg.rows, 3);
        assert_eq!(cfg.blocked, vec![Coord::new(1, 1)]);
        assert_eq!(cfg.start, Coord::new(0, 0));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn load_world_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_world(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DemoError::Io { .. }));
    }

    #[test]
    fn load_world_reports_bad_json() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{{ rows: 3 ").unwrap();
        let err = load_world(f.path()).unwrap_err();
        assert!(matches!(err, DemoError::Json { .. }));
        assert!(err.to_string().contains(&f.path().display().to_string()));
    }

    #[test]
    fn bundled_worlds_are_valid() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("worlds");
        for name in ["classic.json", "maze.json", "walled.json"] {
            let cfg = load_world(&dir.join(name)).unwrap();
            assert!(cfg.validate().is_ok(), "{name}");
        }
    }
}
