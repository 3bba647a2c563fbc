use crate::commands::cue::{InspectCommand, ValidateCommand};
use crate::error::{CueConvertoError, CueConvertoResult};
use crate::util::fs::resolve_cue_paths;
use cue_converto::cd::frames_to_msf;
use cue_converto::{CueResult, Sheet, read_cuesheet};
use log::{debug, error, info};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
struct SheetReport<'a> {
    path: &'a Path,
    sheet: &'a Sheet,
}

/// Parses every sheet on its own task, results keep the order of `paths`.
async fn read_all(paths: Vec<PathBuf>) -> CueConvertoResult<Vec<(PathBuf, CueResult<Sheet>)>> {
    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| {
            tokio::spawn(async move {
                let result = read_cuesheet(&path).await;
                (path, result)
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await?);
    }

    Ok(results)
}

pub async fn inspect_cuesheets(cmd: InspectCommand) -> CueConvertoResult<()> {
    let paths = resolve_cue_paths(&cmd.paths, cmd.recursive).await?;
    debug!("Inspecting {} cue sheet(s)", paths.len());

    let results = read_all(paths).await?;

    let mut failed = 0;
    let mut reports = Vec::new();

    for (path, result) in &results {
        match result {
            Ok(sheet) => reports.push(SheetReport { path, sheet }),
            Err(err) => {
                error!("{path:?}: {err}");
                failed += 1;
            }
        }
    }

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", format_sheet(report.path, report.sheet));
        }
    }

    if failed > 0 {
        return Err(CueConvertoError::InvalidCueSheets(failed));
    }

    Ok(())
}

pub async fn validate_cuesheets(cmd: ValidateCommand) -> CueConvertoResult<()> {
    let paths = resolve_cue_paths(&cmd.paths, cmd.recursive).await?;
    debug!("Validating {} cue sheet(s)", paths.len());

    let mut failed = 0;

    for (path, result) in read_all(paths).await? {
        match result {
            Ok(sheet) => info!("{path:?}: OK, {} track(s)", sheet.tracks.len()),
            Err(err) => {
                error!("{path:?}: {err}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(CueConvertoError::InvalidCueSheets(failed));
    }

    Ok(())
}

fn format_sheet(path: &Path, sheet: &Sheet) -> String {
    let mut lines = vec![path.display().to_string()];

    lines.push(format!(
        "  Catalog: {}",
        sheet.catalog.as_deref().unwrap_or("none")
    ));
    lines.push(format!(
        "  Layout: {}",
        if sheet.is_single_file() {
            "single file"
        } else {
            "one file per track"
        }
    ));

    for track in &sheet.tracks {
        let kind = if track.is_audio { "AUDIO" } else { "DATA" };
        let mut line = format!("  Track {:02} {kind}", track.number);
        if let Some(isrc) = &track.isrc {
            line.push_str(&format!(" ISRC {isrc}"));
        }
        lines.push(line);

        for index in &track.indexes {
            let (m, s, f) = frames_to_msf(index.frames());
            lines.push(format!("    Index {:02} {m:02}:{s:02}:{f:02}", index.number));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cue_converto::parse_cuesheet;

    #[test]
    fn format_sheet_lists_tracks_and_indexes() {
        let sheet = parse_cuesheet(
            b"CATALOG \"0123456789012\"\r\nTRACK 01 AUDIO\r\nISRC USRC17607839\r\nINDEX 01 00:00:00\r\nTRACK 02 MODE1/2352\r\nINDEX 00 03:58:74\r\nINDEX 01 04:00:00\r\n",
        )
        .unwrap();

        let text = format_sheet(Path::new("disc.cue"), &sheet);
        assert_eq!(
            text,
            [
                "disc.cue",
                "  Catalog: 0123456789012",
                "  Layout: single file",
                "  Track 01 AUDIO ISRC USRC17607839",
                "    Index 01 00:00:00",
                "  Track 02 DATA",
                "    Index 00 03:58:74",
                "    Index 01 04:00:00",
            ]
            .join("\n")
        );
    }

    #[test]
    fn format_sheet_handles_empty_sheet() {
        let text = format_sheet(Path::new("empty.cue"), &Sheet::default());
        assert_eq!(text, "empty.cue\n  Catalog: none\n  Layout: single file");
    }

    #[tokio::test]
    async fn validate_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("good.cue"), b"TRACK 01 AUDIO\r\n")
            .await
            .unwrap();
        tokio::fs::write(dir.path().join("bad.cue"), b"FOO\r\n")
            .await
            .unwrap();

        let err = validate_cuesheets(ValidateCommand {
            paths: vec![dir.path().to_path_buf()],
            recursive: false,
        })
        .await
        .unwrap_err();
        assert!(matches!(err, CueConvertoError::InvalidCueSheets(1)));
    }

    #[tokio::test]
    async fn validate_accepts_good_sheets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("good.cue");
        tokio::fs::write(&path, b"FILE \"x.wav\" WAVE\r\nTRACK 01 AUDIO\r\nINDEX 01 00:00:00\r\n")
            .await
            .unwrap();

        validate_cuesheets(ValidateCommand {
            paths: vec![path],
            recursive: false,
        })
        .await
        .unwrap();
    }
}
