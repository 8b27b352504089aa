// Where the exports go.

use crate::export::*;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Destination {
    Stdout,
    File(PathBuf),
    /// A directory: the file name is chosen at write time.
    Directory(PathBuf),
}

impl Destination {
    pub fn parse(s: &str) -> Destination {
        let p = Path::new(s);
        if s == "stdout" {
            Destination::Stdout
        } else if s.ends_with('/') || p.is_dir() {
            Destination::Directory(p.to_path_buf())
        } else {
            Destination::File(p.to_path_buf())
        }
    }

    /// Writes the contents and returns where they went.
    pub fn write(&self, contents: &str, default_name: &str) -> ExportResult<String> {
        let path = match self {
            Destination::Stdout => {
                println!("{}", contents);
                return Ok("stdout".to_string());
            }
            Destination::File(p) => p.clone(),
            Destination::Directory(d) => {
                fs::create_dir_all(d).context(WritingOutputSnafu {
                    path: d.display().to_string(),
                })?;
                d.join(default_name)
            }
        };
        let path_s = path.display().to_string();
        if let Some(parent) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context(WritingOutputSnafu {
                path: parent.display().to_string(),
            })?;
        }
        fs::write(&path, contents).context(WritingOutputSnafu {
            path: path_s.clone(),
        })?;
        info!("Wrote {}", path_s);
        Ok(path_s)
    }
}
