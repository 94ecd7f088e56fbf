//! File names for saved diff visualizations
//!
//! The name is built from the two compared paths so that diffs of
//! same-named files in different trees do not collide. Paths are treated
//! as plain strings; both `/` and `\` separate components and nothing is
//! read from the filesystem.

const FALLBACK_FILE_NAME: &str = "diffimage";

/// Mount parents whose first child component names a drive.
const MOUNT_PARENTS: &[&str] = &["/mnt", "/media", "/amnt", "/auto", "/Volumes"];

/// `/run/media/<user>/<drive>`
const USER_MOUNT_PARENT: &str = "/run/media";

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Split a path into its parent and last component.
///
/// Trailing separators are stripped from the parent unless the parent is
/// the root itself.
fn split_path(path: &str) -> (&str, &str) {
    match path.rfind(SEPARATORS) {
        None => ("", path),
        Some(i) => {
            let head = &path[..=i];
            let tail = &path[i + 1..];
            let trimmed = head.trim_end_matches(SEPARATORS);
            if trimmed.is_empty() {
                (head, tail)
            } else {
                (trimmed, tail)
            }
        }
    }
}

fn components_after<'a>(path: &'a str, parent: &str) -> Option<std::str::Split<'a, [char; 2]>> {
    let rel = path.strip_prefix(parent)?;
    if !rel.is_empty() && !rel.starts_with(SEPARATORS) {
        return None;
    }
    let rel = rel.strip_prefix(SEPARATORS).unwrap_or(rel);
    Some(rel.split(SEPARATORS))
}

/// Name of the mounted drive a path lives on, if it is under a known
/// mount parent.
///
/// # Examples
///
/// ```
/// use channeltinker_color::drive_name;
///
/// assert_eq!(drive_name("/media/backup/photos/a.png").as_deref(), Some("backup"));
/// assert_eq!(drive_name("/run/media/alice/usb/a.png").as_deref(), Some("usb"));
/// assert_eq!(drive_name("/home/alice/a.png"), None);
/// ```
pub fn drive_name(path: &str) -> Option<String> {
    if let Some(mut parts) = components_after(path, USER_MOUNT_PARENT) {
        parts.next()?;
        return parts.next().filter(|s| !s.is_empty()).map(str::to_string);
    }
    MOUNT_PARENTS.iter().find_map(|parent| {
        components_after(path, parent)?
            .next()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Generate a file name for saving the diff of `base_path` and `head_path`.
///
/// `file_name` defaults to the last component of `base_path`. The result
/// is `"{file}-{base}-vs-{head}.png"` with the last components of both
/// paths, extensions included. When those are equal, the name instead
/// reflects where the two files live: the drives they are mounted on, or
/// the first differing parent directories.
///
/// # Examples
///
/// ```
/// use channeltinker_color::generate_diff_name;
///
/// assert_eq!(
///     generate_diff_name("old/a.png", "new/b.png", None),
///     "a.png-a.png-vs-b.png.png"
/// );
/// assert_eq!(
///     generate_diff_name("game-1.0/textures/a.png", "game-2.0/textures/a.png", None),
///     "a.png-game-1.0-vs-game-2.0.png"
/// );
/// ```
pub fn generate_diff_name(base_path: &str, head_path: &str, file_name: Option<&str>) -> String {
    let (_, base_name) = split_path(base_path);
    let (_, head_name) = split_path(head_path);
    let file_name = match file_name {
        Some(name) => name,
        None if !base_name.is_empty() => base_name,
        None => FALLBACK_FILE_NAME,
    };
    let mut diff_name = format!("{file_name}-{base_name}-vs-{head_name}.png");
    if base_name != head_name {
        return diff_name;
    }

    match (drive_name(base_path), drive_name(head_path)) {
        (Some(bd), Some(hd)) => {
            return format!("diffimage {base_name} (in {bd} vs. in {hd}).png");
        }
        (Some(bd), None) => return format!("diffimage {base_name} (base in {bd}).png"),
        (None, Some(hd)) => return format!("diffimage {base_name} (vs one in {hd}).png"),
        (None, None) => {}
    }

    let (mut base_l, mut base_r) = split_path(base_path);
    let (mut head_l, mut head_r) = split_path(head_path);
    loop {
        log::trace!("building diff name from {base_l:?}/{base_r:?} vs {head_l:?}/{head_r:?}");
        if base_r.is_empty() && head_r.is_empty() {
            break;
        } else if base_r.is_empty() {
            diff_name = format!("diffimage {base_name} (further up) vs. {head_r}.png");
            break;
        } else if head_r.is_empty() {
            diff_name = format!("diffimage {base_name} (vs one further up).png");
            break;
        } else if base_r != head_r {
            diff_name = format!("{file_name}-{base_r}-vs-{head_r}.png");
            break;
        } else if base_l.is_empty() && head_l.is_empty() {
            diff_name = format!("diffimage (both further up) vs. {head_r}.png");
            break;
        }
        (base_l, base_r) = split_path(base_l);
        (head_l, head_r) = split_path(head_l);
    }
    diff_name
}
