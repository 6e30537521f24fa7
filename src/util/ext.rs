use std::{
	ffi::OsString,
	os::unix::prelude::{OsStrExt, OsStringExt},
	path::{Path, PathBuf},
};

pub trait PathExt {
	fn tilde_expand(&self) -> PathBuf;
	fn with_appended_extension(&self, ext: &str) -> PathBuf;
}

impl PathExt for Path {
	fn tilde_expand(&self) -> PathBuf {
		OsString::from_vec(tilde_expand::tilde_expand(self.as_os_str().as_bytes())).into()
	}

	/// Appends `.<ext>` to the whole file name, so `dump.txt` becomes `dump.txt.bin` rather than
	/// `dump.bin`
	fn with_appended_extension(&self, ext: &str) -> PathBuf {
		let mut name = self.as_os_str().to_owned();
		name.push(".");
		name.push(ext);
		name.into()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn appended_extension_keeps_existing_one() {
		assert_eq!(
			Path::new("dir/dump.txt").with_appended_extension("bin"),
			PathBuf::from("dir/dump.txt.bin")
		);
		assert_eq!(
			Path::new("noext").with_appended_extension("safe"),
			PathBuf::from("noext.safe")
		);
	}

	#[test]
	fn tilde_expand_leaves_plain_paths_alone() {
		assert_eq!(
			Path::new("/tmp/in.txt").tilde_expand(),
			PathBuf::from("/tmp/in.txt")
		);
	}
}
