use std::collections::HashMap;
use std::io::{Read, Seek, SeekFrom};

use embedfs::{EmbedFs, FileSystem};

fn main() {
    // The content map is typically produced by a build-time asset
    // embedding step; here it is spelled out by hand.
    let mut assets = HashMap::new();
    assets.insert("/index.html".to_string(), "<html>hello</html>".to_string());
    assets.insert("/js/app.js".to_string(), "console.log('hi');".to_string());
    assets.insert("/css/site.css".to_string(), "body { margin: 0 }".to_string());

    let fs = EmbedFs::new(assets);

    // Walk the synthesized tree from the root. The `js` and `css`
    // directories were never declared; they are implied by the file paths.
    let root = fs.open("/").unwrap();
    for child in root.read_dir(0) {
        let marker = if child.is_dir() { "d" } else { "-" };
        println!("{} {} ({} bytes)", marker, child.name(), child.size());
    }

    // Read a file back in full.
    let mut app = fs.open("/js/app.js").unwrap();
    let mut source = String::new();
    app.read_to_string(&mut source).unwrap();
    println!("app.js: {source}");

    // Random access works too: skip to the closing tag.
    let mut page = fs.open("/index.html").unwrap();
    page.seek(SeekFrom::End(-7)).unwrap();
    let mut tail = String::new();
    page.read_to_string(&mut tail).unwrap();
    println!("tail of index.html: {tail}");

    // A miss is the one error this file system produces.
    let err = fs.open("/favicon.ico").unwrap_err();
    println!("{err}");
}
