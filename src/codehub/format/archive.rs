use crate::error::Result;
use crate::model::Snippet;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

const ROOT_DIR: &str = "codehub";

/// Writes every fragment of every snippet as a file in a gzipped tarball.
///
/// Layout: `codehub/<title>-<id prefix>/<file name>`.
pub fn write_archive<W: Write>(writer: W, snippets: &[Snippet]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for snippet in snippets {
        let dir = format!(
            "{}/{}-{}",
            ROOT_DIR,
            sanitize_filename(&snippet.title),
            snippet.id.chars().take(8).collect::<String>()
        );

        for (i, fragment) in snippet.fragments.iter().enumerate() {
            let mut file_name = sanitize_filename(&fragment.file_name);
            if file_name.is_empty() {
                file_name = format!("fragment-{}", i + 1);
            }

            let mut header = tar::Header::new_gnu();
            header.set_size(fragment.code.len() as u64);
            header.set_mode(0o644);
            header.set_mtime(snippet.updated_at.timestamp().max(0) as u64);
            header.set_cksum();

            tar.append_data(
                &mut header,
                format!("{}/{}", dir, file_name),
                fragment.code.as_bytes(),
            )?;
        }
    }

    tar.into_inner()?.finish()?;
    Ok(())
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .trim_start_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Fragment;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn entries(buf: &[u8]) -> Vec<(String, String)> {
        let mut archive = tar::Archive::new(GzDecoder::new(buf));
        archive
            .entries()
            .unwrap()
            .map(|entry| {
                let mut entry = entry.unwrap();
                let path = entry.path().unwrap().to_string_lossy().into_owned();
                let mut content = String::new();
                entry.read_to_string(&mut content).unwrap();
                (path, content)
            })
            .collect()
    }

    #[test]
    fn test_archive_has_one_file_per_fragment() {
        let mut snippet = Snippet::new(
            "Web: helpers",
            vec![
                Fragment::new("fetch.py", "python", "import requests"),
                Fragment::new("run.sh", "bash", "python fetch.py"),
            ],
        );
        snippet.id = "0123456789abcdef".into();

        let mut buf = Vec::new();
        write_archive(&mut buf, &[snippet]).unwrap();

        let files = entries(&buf);
        assert_eq!(
            files,
            vec![
                (
                    "codehub/Web_ helpers-01234567/fetch.py".to_string(),
                    "import requests".to_string()
                ),
                (
                    "codehub/Web_ helpers-01234567/run.sh".to_string(),
                    "python fetch.py".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_empty_archive_is_still_gzip() {
        let mut buf = Vec::new();
        write_archive(&mut buf, &[]).unwrap();
        assert_eq!(&buf[..2], &[0x1f, 0x8b]);
        assert!(entries(&buf).is_empty());
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize_filename("main.rs"), "main.rs");
        assert_eq!(sanitize_filename("../etc/passwd"), "_etc_passwd");
        assert_eq!(sanitize_filename("a\\b"), "a_b");
        assert_eq!(sanitize_filename(".hidden"), "hidden");
    }
}
