//! Client script: periodic reload and the Refresh button.

pub(crate) const SCRIPT: &str = r#"
const LAST_REFRESH_KEY = 'folio:lastRefresh';

function showLastRefresh() {
    const status = document.getElementById('refreshStatus');
    const last = localStorage.getItem(LAST_REFRESH_KEY);
    if (status && last) {
        status.textContent = 'Last refresh: ' + new Date(Number(last)).toLocaleString();
    }
}

async function refreshPrices() {
    const button = document.getElementById('refreshBtn');
    const status = document.getElementById('refreshStatus');
    button.disabled = true;
    status.textContent = 'Refreshing...';
    try {
        const response = await fetch('/api/refresh', { method: 'POST' });
        const body = await response.json();
        if (!response.ok || !body.success) {
            throw new Error(body.details || body.error || response.statusText);
        }
        localStorage.setItem(LAST_REFRESH_KEY, String(Date.now()));
        window.location.reload();
    } catch (err) {
        status.textContent = 'Refresh failed: ' + err.message;
        button.disabled = false;
    }
}

(function () {
    showLastRefresh();
    const pollMs = Number(document.body.dataset.pollMs);
    if (pollMs > 0) {
        setInterval(function () { window.location.reload(); }, pollMs);
    }
})();
"#;
