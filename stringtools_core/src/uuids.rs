use std::fmt;

use uuid::Uuid;

/// Default number of UUIDs per block.
pub const DEFAULT_UUID_COUNT: usize = 5;

/// Three independently generated blocks of random v4 UUIDs.
#[derive(Debug, Clone)]
pub struct UuidBatch {
	/// `0f8fad5b-d9cb-469f-a165-70867728950e`
	pub lowercase: Vec<String>,
	/// `7C9E6679-7425-40DE-944B-E07FC1F90AE7`
	pub uppercase: Vec<String>,
	/// `7C9E6679742540DE944BE07FC1F90AE7`
	pub uppercase_compact: Vec<String>,
}

impl UuidBatch {
	pub fn generate(count: usize) -> Self {
		Self {
			lowercase: (0..count)
				.map(|_| Uuid::new_v4().hyphenated().to_string())
				.collect(),
			uppercase: (0..count)
				.map(|_| Uuid::new_v4().hyphenated().to_string().to_uppercase())
				.collect(),
			uppercase_compact: (0..count)
				.map(|_| Uuid::new_v4().simple().to_string().to_uppercase())
				.collect(),
		}
	}
}

impl fmt::Display for UuidBatch {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let blocks = [&self.lowercase, &self.uppercase, &self.uppercase_compact];
		for (index, block) in blocks.into_iter().enumerate() {
			if index > 0 {
				writeln!(f)?;
			}
			for uuid in block {
				writeln!(f, "{uuid}")?;
			}
		}

		Ok(())
	}
}

/// Generate `count` UUIDs in each of the three spellings, one per line, with
/// a blank line between blocks.
pub fn generate_uuids(count: usize) -> String {
	UuidBatch::generate(count).to_string()
}
