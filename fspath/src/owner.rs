//! User and group name lookup for numeric owner ids.

use std::io;

use nix::errno::Errno;
use nix::unistd::{Gid, Group, Uid, User};

/// Error codes that implementations use to report "no such entry".
fn is_missing_entry(errno: Errno) -> bool {
    matches!(errno, Errno::ENOENT | Errno::ESRCH | Errno::EBADF | Errno::EPERM)
}

fn lookup<T>(found: nix::Result<Option<T>>) -> io::Result<Option<T>> {
    match found {
        Ok(entry) => Ok(entry),
        Err(errno) if is_missing_entry(errno) => Ok(None),
        Err(errno) => Err(io::Error::from(errno)),
    }
}

/// Look up the login name for `uid`.
///
/// Returns `Ok(None)` when the id has no passwd entry.
pub(crate) fn user_name(uid: u32) -> io::Result<Option<String>> {
    Ok(lookup(User::from_uid(Uid::from_raw(uid)))?.map(|user| user.name))
}

/// Look up the group name for `gid`.
///
/// Returns `Ok(None)` when the id has no group entry.
pub(crate) fn group_name(gid: u32) -> io::Result<Option<String>> {
    Ok(lookup(Group::from_gid(Gid::from_raw(gid)))?.map(|group| group.name))
}
