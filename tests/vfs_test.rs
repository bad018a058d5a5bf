/*!
 * VFS Tests
 * Descriptor semantics, path resolution, and entry lifecycle
 */

use std::sync::Arc;

use joinpdf::vfs::types::{O_APPEND, O_CREAT, O_EXCL, O_RDONLY, O_RDWR, O_TRUNC, O_WRONLY};
use joinpdf::vfs::{BufferSink, MemFs, VfsError};
use pretty_assertions::assert_eq;

#[test]
fn test_standard_directories_exist() {
    let fs = MemFs::new();
    assert!(fs.exists("/"));
    assert!(fs.exists("/tmp"));
    assert!(fs.exists("/work"));
    assert!(fs.stat("/work").unwrap().is_dir());
}

#[test]
fn test_open_missing_without_create_fails() {
    let fs = MemFs::new();
    match fs.open("/work/missing.pdf", O_RDONLY, 0o666) {
        Err(VfsError::NotFound(path)) => assert_eq!(path, "/work/missing.pdf"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_create_then_exclusive_create_collides() {
    let fs = MemFs::new();
    let fd = fs.open("/work/new.pdf", O_WRONLY | O_CREAT, 0o666).unwrap();
    fs.close(fd).unwrap();

    match fs.open("/work/new.pdf", O_WRONLY | O_CREAT | O_EXCL, 0o666) {
        Err(VfsError::AlreadyExists(_)) => {}
        other => panic!("expected AlreadyExists, got {:?}", other),
    }
}

#[test]
fn test_open_directory_for_file_io_fails() {
    let fs = MemFs::new();
    match fs.open("/work", O_RDONLY, 0o666) {
        Err(VfsError::IsADirectory(_)) => {}
        other => panic!("expected IsADirectory, got {:?}", other),
    }
}

#[test]
fn test_write_then_read_round_trips() {
    let fs = MemFs::new();
    let fd = fs.open("/work/data.bin", O_RDWR | O_CREAT, 0o666).unwrap();
    fs.write(fd, b"hello world", None).unwrap();

    // Cursor is at EOF now; positional read sees everything
    assert_eq!(fs.read(fd, 64, Some(0)).unwrap(), b"hello world");

    // Cursor read at EOF returns zero bytes, not an error
    assert_eq!(fs.read(fd, 64, None).unwrap(), b"");
    fs.close(fd).unwrap();
}

#[test]
fn test_cursor_reads_advance_positional_reads_do_not() {
    let fs = MemFs::new();
    fs.write_file("/work/data.bin", b"abcdef").unwrap();

    let fd = fs.open("/work/data.bin", O_RDONLY, 0o666).unwrap();
    assert_eq!(fs.read(fd, 2, None).unwrap(), b"ab");
    assert_eq!(fs.read(fd, 2, Some(0)).unwrap(), b"ab");
    // Positional read above did not move the cursor
    assert_eq!(fs.read(fd, 2, None).unwrap(), b"cd");
    assert_eq!(fs.read(fd, 100, None).unwrap(), b"ef");
    fs.close(fd).unwrap();
}

#[test]
fn test_sparse_write_zero_fills_gap() {
    let fs = MemFs::new();
    let fd = fs.open("/work/sparse.bin", O_RDWR | O_CREAT, 0o666).unwrap();
    fs.write(fd, b"xy", Some(4)).unwrap();

    assert_eq!(fs.read(fd, 16, Some(0)).unwrap(), b"\0\0\0\0xy");
    assert_eq!(fs.stat("/work/sparse.bin").unwrap().size, 6);
    fs.close(fd).unwrap();
}

#[test]
fn test_truncate_on_open_resets_data() {
    let fs = MemFs::new();
    fs.write_file("/work/doc.pdf", b"old contents").unwrap();

    let fd = fs.open("/work/doc.pdf", O_WRONLY | O_TRUNC, 0o666).unwrap();
    fs.close(fd).unwrap();
    assert_eq!(fs.stat("/work/doc.pdf").unwrap().size, 0);
}

#[test]
fn test_append_positions_cursor_at_eof() {
    let fs = MemFs::new();
    fs.write_file("/work/log.txt", b"abc").unwrap();

    let fd = fs.open("/work/log.txt", O_WRONLY | O_APPEND, 0o666).unwrap();
    fs.write(fd, b"def", None).unwrap();
    fs.close(fd).unwrap();
    assert_eq!(fs.read_file("/work/log.txt").unwrap(), b"abcdef");
}

#[test]
fn test_close_unknown_descriptor() {
    let fs = MemFs::new();
    assert_eq!(fs.close(42), Err(VfsError::BadDescriptor(42)));

    let fd = fs.open("/work/a.pdf", O_WRONLY | O_CREAT, 0o666).unwrap();
    fs.close(fd).unwrap();
    assert_eq!(fs.close(fd), Err(VfsError::BadDescriptor(fd)));
}

#[test]
fn test_mkdir_idempotent_on_directories_only() {
    let fs = MemFs::new();
    fs.mkdir("/work/sub").unwrap();
    fs.mkdir("/work/sub").unwrap();

    fs.write_file("/work/file.pdf", b"%PDF").unwrap();
    match fs.mkdir("/work/file.pdf") {
        Err(VfsError::NotADirectory(_)) => {}
        other => panic!("expected NotADirectory, got {:?}", other),
    }

    match fs.mkdir("/no/such/parent") {
        Err(VfsError::NotFound(_)) => {}
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_rmdir_requires_empty() {
    let fs = MemFs::new();
    fs.mkdir("/work/sub").unwrap();
    fs.write_file("/work/sub/a.pdf", b"%PDF").unwrap();

    assert_eq!(
        fs.rmdir("/work/sub"),
        Err(VfsError::NotEmpty("/work/sub".to_string()))
    );

    fs.unlink("/work/sub/a.pdf").unwrap();
    fs.rmdir("/work/sub").unwrap();
    assert!(!fs.exists("/work/sub"));
}

#[test]
fn test_unlink_rejects_directories_as_not_found() {
    let fs = MemFs::new();
    fs.mkdir("/work/sub").unwrap();
    assert_eq!(
        fs.unlink("/work/sub"),
        Err(VfsError::NotFound("/work/sub".to_string()))
    );
    assert_eq!(
        fs.unlink("/work/ghost.pdf"),
        Err(VfsError::NotFound("/work/ghost.pdf".to_string()))
    );
}

#[test]
fn test_readdir_lists_children() {
    let fs = MemFs::new();
    fs.write_file("/work/a.pdf", b"%PDF").unwrap();
    fs.write_file("/work/b.pdf", b"%PDF").unwrap();

    let mut names = fs.readdir("/work").unwrap();
    names.sort();
    assert_eq!(names, vec!["a.pdf", "b.pdf"]);

    match fs.readdir("/work/a.pdf") {
        Err(VfsError::NotADirectory(_)) => {}
        other => panic!("expected NotADirectory, got {:?}", other),
    }
}

#[test]
fn test_rename_moves_entry() {
    let fs = MemFs::new();
    fs.write_file("/work/output.tmp", b"%PDF result").unwrap();
    fs.rename("/work/output.tmp", "/work/output.pdf").unwrap();

    assert!(!fs.exists("/work/output.tmp"));
    assert_eq!(fs.read_file("/work/output.pdf").unwrap(), b"%PDF result");

    assert!(matches!(
        fs.rename("/work/ghost.pdf", "/work/x.pdf"),
        Err(VfsError::NotFound(_))
    ));
    assert!(matches!(
        fs.rename("/work/output.pdf", "/no/parent/x.pdf"),
        Err(VfsError::NotFound(_))
    ));
}

#[test]
fn test_cwd_affects_resolution() {
    let fs = MemFs::new();
    fs.set_cwd("/work").unwrap();
    fs.write_file("out.pdf", b"%PDF").unwrap();
    assert!(fs.exists("/work/out.pdf"));

    assert!(matches!(fs.set_cwd("/missing"), Err(VfsError::NotFound(_))));
    assert!(matches!(
        fs.set_cwd("/work/out.pdf"),
        Err(VfsError::NotADirectory(_))
    ));
}

#[test]
fn test_stat_and_fstat_agree() {
    let fs = MemFs::new();
    fs.write_file("/work/doc.pdf", b"%PDF-1.4").unwrap();

    let by_path = fs.stat("/work/doc.pdf").unwrap();
    assert!(by_path.is_file());
    assert_eq!(by_path.size, 8);
    assert!(by_path.created_ms > 0);

    let fd = fs.open("/work/doc.pdf", O_RDONLY, 0o666).unwrap();
    let by_fd = fs.fstat(fd).unwrap();
    assert_eq!(by_fd.size, by_path.size);
    assert_eq!(by_fd.file_type, by_path.file_type);
    fs.close(fd).unwrap();

    // stdout reports as an empty file for the engine's startup probe
    let stream = fs.fstat(1).unwrap();
    assert!(stream.is_file());
    assert_eq!(stream.size, 0);
}

#[test]
fn test_stdio_writes_capture_lines() {
    let sink = Arc::new(BufferSink::new());
    let fs = MemFs::with_console(sink.clone());

    fs.write(1, b"writing output.pdf\r\ndone\n\n", None).unwrap();
    fs.write(2, b"  \n", None).unwrap();

    assert_eq!(sink.lines(), vec!["writing output.pdf", "done"]);
    // Stream contents are never stored, and streams are not readable
    assert!(matches!(fs.read(1, 8, None), Err(VfsError::BadDescriptor(1))));
}

#[test]
fn test_metadata_noops_and_link_family() {
    let fs = MemFs::new();
    fs.write_file("/work/doc.pdf", b"%PDF").unwrap();

    fs.chmod("/work/doc.pdf", 0o600).unwrap();
    fs.chown("/work/doc.pdf", 0, 0).unwrap();
    fs.truncate("/work/doc.pdf", 0).unwrap();
    fs.utimes("/work/doc.pdf", 0, 0).unwrap();

    assert!(matches!(
        fs.symlink("/work/doc.pdf", "/work/alias.pdf"),
        Err(VfsError::NotSupported(_))
    ));
    assert!(matches!(
        fs.link("/work/doc.pdf", "/work/alias.pdf"),
        Err(VfsError::NotSupported(_))
    ));
    assert!(matches!(
        fs.readlink("/work/doc.pdf"),
        Err(VfsError::NotSupported(_))
    ));
}
