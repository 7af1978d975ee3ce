// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Named color persistence, ie: an embedded key/value store that resolves color
//! names to [RgbColor] triplets.
//!
//! - It is a wrapper around the [kv] crate, which itself uses `sled` under the hood.
//! - [load_or_create_store] either creates a new store or loads an existing one from
//!   the given db folder.
//! - [load_or_create_color_bucket] does the same for the `name → color` bucket inside
//!   a store.
//! - [insert_color], [lookup_color], [remove_color], [is_color_stored] and
//!   [color_names] are the operations on that bucket.
//! - [seed_reference_palette] loads the classic color names into a fresh bucket.
//!
//! Colors are serialized to [Bincode] before save, and deserialized after load. Fine
//! grained errors are provided by [miette] and [thiserror], in
//! [color_store_error::ColorStoreErrorCouldNot].

use crate::{CommonResult, RgbColor, sizing::InlineVecColorNames};
use kv::{Bincode, Config, Store};
use miette::{Context, IntoDiagnostic};

pub use color_store_error::ColorStoreErrorCouldNot;

/// Type alias for the [kv::Bucket] that holds `name → color` pairs.
///
/// 1. A [kv::Bucket] is created from a [Store], and provides typed access to one
///    section of it.
/// 2. The values are serialized w/ [Bincode] before they hit the disk, which is why
///    [RgbColor] derives [serde::Serialize] and [serde::Deserialize].
pub type ColorBucket<'a> = kv::Bucket<'a, String, Bincode<RgbColor>>;

mod default_settings {
    #[derive(Debug, strum_macros::EnumString, Hash, PartialEq, Eq, Clone, Copy)]
    pub enum Keys {
        /// The [kv::Store] folder path name on disk, used when the caller does not
        /// provide one.
        StoreFolderPath,
        /// The [kv::Bucket] name, used when the caller does not provide one.
        BucketName,
    }

    pub fn get(key: Keys) -> String {
        match key {
            Keys::StoreFolderPath => "color_store_folder".to_string(),
            Keys::BucketName => "named_colors".to_string(),
        }
    }
}

/// The classic colors, w/ the channel triplets their names resolve to.
/// [seed_reference_palette] loads these, so a fresh store answers the familiar names
/// out of the box.
pub const REFERENCE_PALETTE: [(&str, RgbColor); 11] = [
    ("Red", RgbColor { red: 255, green: 0, blue: 0 }),
    ("Blue", RgbColor { red: 0, green: 0, blue: 255 }),
    ("Grey", RgbColor { red: 128, green: 128, blue: 128 }),
    ("Pink", RgbColor { red: 255, green: 192, blue: 203 }),
    ("Black", RgbColor { red: 0, green: 0, blue: 0 }),
    ("Brown", RgbColor { red: 165, green: 42, blue: 42 }),
    ("Green", RgbColor { red: 0, green: 128, blue: 0 }),
    ("White", RgbColor { red: 255, green: 255, blue: 255 }),
    ("Orange", RgbColor { red: 255, green: 165, blue: 0 }),
    ("Purple", RgbColor { red: 128, green: 0, blue: 128 }),
    ("Yellow", RgbColor { red: 255, green: 255, blue: 0 }),
];

/// Create the db folder if it doesn't exist. Otherwise load it from the folder on
/// disk. Note there are no lifetime annotations on this function. The bucket functions
/// below do have them, since they are all tied to the lifetime of the returned
/// [Store].
///
/// # Errors
///
/// Returns an error if:
/// - The db folder cannot be created.
/// - The store cannot be opened due to I/O errors or permission issues.
/// - The db is corrupted or locked by another process.
#[tracing::instrument]
pub fn load_or_create_store(
    maybe_db_folder_path: Option<&String>,
) -> CommonResult<Store> {
    // Configure the db folder location.
    let db_folder_path = maybe_db_folder_path.cloned().unwrap_or_else(|| {
        default_settings::get(default_settings::Keys::StoreFolderPath)
    });

    let cfg = Config::new(db_folder_path.clone());

    // Open the key/value store using the Config.
    let store =
        Store::new(cfg)
            .into_diagnostic()
            .wrap_err(ColorStoreErrorCouldNot::CreateDbFolder {
                db_folder_path: db_folder_path.clone(),
            })?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "📑 load or create color store",
        db_folder_path = %db_folder_path
    );

    Ok(store)
}

/// A [ColorBucket] provides typed access to the `name → color` section of the
/// key/value [Store]. It has a lifetime annotation, since it is created from a
/// [Store].
///
/// # Errors
///
/// Returns an error if the bucket cannot be created from the store.
#[tracing::instrument(fields(store = ?store.path(), buckets = ?store.buckets()))]
pub fn load_or_create_color_bucket<'a>(
    store: &Store,
    maybe_bucket_name: Option<&String>,
) -> CommonResult<ColorBucket<'a>> {
    let bucket_name = maybe_bucket_name.cloned().unwrap_or_else(|| {
        default_settings::get(default_settings::Keys::BucketName)
    });

    let color_bucket: ColorBucket<'_> = store
        .bucket(Some(&bucket_name))
        .into_diagnostic()
        .wrap_err(ColorStoreErrorCouldNot::CreateBucketFromStore {
            bucket_name: bucket_name.clone(),
        })?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "📦 load or create color bucket from store",
        bucket_name = %bucket_name
    );

    Ok(color_bucket)
}

/// The color is serialized using [Bincode] prior to saving it under `name`. An
/// existing color w/ the same name is overwritten.
///
/// # Errors
///
/// Returns an error if the write to the underlying store fails.
#[tracing::instrument(skip(bucket))]
pub fn insert_color(
    bucket: &ColorBucket<'_>,
    name: &str,
    color: RgbColor,
) -> CommonResult<()> {
    bucket
        .set(&name.to_string(), &Bincode(color))
        .into_diagnostic()
        .wrap_err(ColorStoreErrorCouldNot::SaveColorToBucket)?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🔽 save named color to bucket",
        name = %name,
        color = %color.hex()
    );

    Ok(())
}

/// The stored value is deserialized from [Bincode] after load. A name that has never
/// been stored yields `Ok(None)`, not an error.
///
/// # Errors
///
/// Returns an error if the read from the underlying store fails.
#[tracing::instrument(skip(bucket))]
pub fn lookup_color(
    bucket: &ColorBucket<'_>,
    name: &str,
) -> CommonResult<Option<RgbColor>> {
    let maybe_value: Option<Bincode<RgbColor>> = bucket
        .get(&name.to_string())
        .into_diagnostic()
        .wrap_err(ColorStoreErrorCouldNot::LoadColorFromBucket)?;

    let it = match maybe_value {
        // Deserialize the binary payload back into a [RgbColor].
        Some(Bincode(payload)) => Some(payload),
        _ => None,
    };

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🔼 load named color from bucket",
        name = %name,
        color = ?it
    );

    Ok(it)
}

/// Removes the named color and returns what was stored under it, or `None` if the
/// name was never stored.
///
/// # Errors
///
/// Returns an error if the removal from the underlying store fails.
#[tracing::instrument(skip(bucket))]
pub fn remove_color(
    bucket: &ColorBucket<'_>,
    name: &str,
) -> CommonResult<Option<RgbColor>> {
    let maybe_value: Option<Bincode<RgbColor>> = bucket
        .remove(&name.to_string())
        .into_diagnostic()
        .wrap_err(ColorStoreErrorCouldNot::RemoveColorFromBucket)?;

    let it = match maybe_value {
        Some(Bincode(payload)) => Some(payload),
        _ => None,
    };

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "❌ remove named color from bucket",
        name = %name,
        color = ?it
    );

    Ok(it)
}

/// # Errors
///
/// Returns an error if the read from the underlying store fails.
#[tracing::instrument(skip(bucket))]
pub fn is_color_stored(bucket: &ColorBucket<'_>, name: &str) -> CommonResult<bool> {
    let it = bucket
        .contains(&name.to_string())
        .into_diagnostic()
        .wrap_err(ColorStoreErrorCouldNot::LoadColorFromBucket)?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🔼 check whether named color is in bucket",
        name = %name,
        stored = %it
    );

    Ok(it)
}

/// Every name currently stored in the bucket. Items that fail to read are skipped,
/// since this is a snapshot of the current db state, not a transaction.
#[must_use]
pub fn color_names(bucket: &ColorBucket<'_>) -> InlineVecColorNames {
    let mut acc = InlineVecColorNames::new();
    for item in bucket.iter().flatten() {
        let Ok(name) = item.key::<String>() else {
            continue;
        };
        acc.push(name);
    }
    acc
}

/// Load the [REFERENCE_PALETTE] names into the bucket, skipping any name that already
/// exists. Reseeding is therefore idempotent and never clobbers a caller override.
///
/// # Errors
///
/// Returns an error if a read or write on the underlying store fails.
#[tracing::instrument(skip(bucket))]
pub fn seed_reference_palette(bucket: &ColorBucket<'_>) -> CommonResult<()> {
    for (name, color) in REFERENCE_PALETTE {
        if is_color_stored(bucket, name)? {
            continue;
        }
        insert_color(bucket, name, color)?;
    }

    tracing::debug!(
        message = "🎨 seed reference palette into bucket",
        count = REFERENCE_PALETTE.len()
    );

    Ok(())
}

pub mod color_store_error {
    /// Fine grained color store errors, surfaced as the outermost [miette] context
    /// message when an operation fails.
    #[derive(thiserror::Error, Debug, miette::Diagnostic)]
    pub enum ColorStoreErrorCouldNot {
        #[error("📑 Could not create db folder: '{db_folder_path}' on disk")]
        CreateDbFolder { db_folder_path: String },

        #[error("📦 Could not create bucket from store: '{bucket_name}'")]
        CreateBucketFromStore { bucket_name: String },

        #[error("🔽 Could not save named color to bucket")]
        SaveColorToBucket,

        #[error("🔼 Could not load named color from bucket")]
        LoadColorFromBucket,

        #[error("❌ Could not remove named color from bucket")]
        RemoveColorFromBucket,
    }
}
