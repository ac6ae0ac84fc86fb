//! Dashboard stylesheet, inlined into every page.

pub(crate) const STYLES: &str = r#"
:root {
    --bg: #f8fafc;
    --card: #ffffff;
    --border: #e2e8f0;
    --text: #0f172a;
    --muted: #64748b;
    --accent: #6366f1;
    --gain: #059669;
    --loss: #dc2626;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
}

.container { max-width: 1400px; margin: 0 auto; padding: 24px; }

header {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
    margin-bottom: 24px;
}

header h1 { margin: 0; font-size: 1.5rem; }

nav.selector { display: flex; flex-wrap: wrap; gap: 8px; }

nav.selector a {
    padding: 6px 14px;
    border: 1px solid var(--border);
    border-radius: 999px;
    color: var(--muted);
    text-decoration: none;
    background: var(--card);
}

nav.selector a.active { background: var(--accent); border-color: var(--accent); color: #fff; }

.controls { display: flex; align-items: center; gap: 12px; }

.btn {
    padding: 8px 16px;
    border: none;
    border-radius: 6px;
    background: var(--accent);
    color: #fff;
    cursor: pointer;
    font-weight: 600;
}

.btn:disabled { opacity: 0.6; cursor: wait; }

.status { font-size: 0.85rem; color: var(--muted); }

.banner {
    padding: 16px;
    border: 1px solid #fecaca;
    border-radius: 8px;
    background: #fef2f2;
    color: var(--loss);
    font-weight: 600;
}

.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 16px;
    margin-bottom: 24px;
}

.card {
    padding: 16px;
    border: 1px solid var(--border);
    border-radius: 8px;
    background: var(--card);
}

.card-title { font-size: 0.8rem; color: var(--muted); text-transform: uppercase; }
.card-value { margin-top: 6px; font-size: 1.4rem; font-weight: 700; }
.card-note { margin-top: 4px; font-size: 0.8rem; color: var(--muted); }

section { margin-bottom: 32px; }
section h2 { font-size: 1.1rem; margin: 0 0 12px; }
section h3 { font-size: 0.95rem; margin: 20px 0 8px; }

.table-wrap { overflow-x: auto; border: 1px solid var(--border); border-radius: 8px; background: var(--card); }

table { width: 100%; border-collapse: collapse; font-size: 0.85rem; }
th, td { padding: 8px 10px; border-bottom: 1px solid var(--border); white-space: nowrap; text-align: right; }
th:first-child, td:first-child { text-align: left; }
th { background: #f1f5f9; color: var(--muted); font-weight: 600; }
th a { color: inherit; text-decoration: none; }
th.sorted a { color: var(--text); }

.gain { color: var(--gain); }
.loss { color: var(--loss); }
.empty { color: var(--muted); font-style: italic; }

.chart { width: 100%; height: auto; }
.chart text { font-size: 11px; fill: var(--muted); }

.legend { display: flex; flex-wrap: wrap; gap: 12px; margin-top: 8px; font-size: 0.8rem; }
.legend span::before {
    content: "";
    display: inline-block;
    width: 10px;
    height: 10px;
    margin-right: 4px;
    border-radius: 2px;
    background: var(--swatch);
}
"#;
