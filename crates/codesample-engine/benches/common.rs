// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_authored_content(blocks: usize) -> String {
    let base = concat!(
        "<h2>Section</h2>\n<p>Paragraph with <b>some</b> content.</p>\n",
        "<pre class=\" language-rust  line-numbers\">fn example() {<br>",
        "    if a &lt; b &amp;&amp; c { println!(\"Hello\"); }<br>}</pre>\n",
    );
    base.repeat(blocks)
}

#[allow(dead_code)]
pub fn generate_decorated_content(blocks: usize) -> String {
    let base = concat!(
        "<p>Paragraph before the sample.</p>\n",
        "<pre class=\"language-js\" contenteditable=\"false\"><code>",
        "<span class=\"token keyword\">const</span> x ",
        "<span class=\"token operator\">=</span> ",
        "<span class=\"token number\">1</span>;\n",
        "<span class=\"token keyword\">return</span> x;</code></pre>\n",
    );
    base.repeat(blocks)
}
