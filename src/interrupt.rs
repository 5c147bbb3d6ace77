/// Exit status used when the run is cancelled with Ctrl-C (128 + SIGINT).
pub const EXIT_INTERRUPTED: i32 = 130;

/// Replace the default SIGINT disposition with one that prints a short
/// message before exiting.
#[cfg(unix)]
pub fn install() {
    extern "C" fn on_sigint(_signal: libc::c_int) {
        // Only async-signal-safe calls in here.
        const MSG: &[u8] = b"Interrupted.\n";
        unsafe {
            libc::write(libc::STDERR_FILENO, MSG.as_ptr().cast(), MSG.len());
            libc::_exit(EXIT_INTERRUPTED);
        }
    }

    let handler = on_sigint as extern "C" fn(libc::c_int);
    unsafe {
        libc::signal(libc::SIGINT, handler as libc::sighandler_t);
    }
}

#[cfg(not(unix))]
pub fn install() {}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_sigint_exits_with_interrupted_status() {
        // The child only makes async-signal-safe calls after fork.
        let pid = unsafe { libc::fork() };
        assert!(pid >= 0, "fork failed");
        if pid == 0 {
            unsafe {
                install();
                libc::raise(libc::SIGINT);
                libc::_exit(0);
            }
        }

        let mut status: libc::c_int = 0;
        let waited = unsafe { libc::waitpid(pid, &mut status, 0) };
        assert_eq!(waited, pid);
        assert!(libc::WIFEXITED(status));
        assert_eq!(libc::WEXITSTATUS(status), EXIT_INTERRUPTED);
    }
}
