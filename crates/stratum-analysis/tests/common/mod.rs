//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Write `content` to `root/rel`, creating parent directories.
pub fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// A project with one bounded context, a shared kernel and a composition root.
///
/// ```text
/// src/billing/domain/order.py          imports item
/// src/billing/domain/item.py
/// src/billing/app/create_order.py      imports order, shared utils
/// src/billing/ports/driving/facade.py  imports create_order
/// src/shared/helpers/utils.py
/// src/composition_root/containers.py   imports facade
/// ```
pub fn billing_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "src/billing/__init__.py", "");
    write(root, "src/billing/domain/__init__.py", "");
    write(root, "src/billing/domain/order.py", "from .item import Item\n\nclass Order: ...\n");
    write(root, "src/billing/domain/item.py", "class Item: ...\n");
    write(
        root,
        "src/billing/app/create_order.py",
        "from billing.domain.order import Order\nfrom shared.helpers import utils\n",
    );
    write(
        root,
        "src/billing/ports/driving/facade.py",
        "from ...app import create_order\n",
    );
    write(root, "src/shared/helpers/utils.py", "def slug(x): return x\n");
    write(
        root,
        "src/composition_root/containers.py",
        "import src.billing.ports.driving.facade\nimport dependency_injector\n",
    );
    dir
}
