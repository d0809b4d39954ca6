//! Inline client script for the contact form.

use sniper_core::CONTACT_API_PATH;

use crate::form::{FORM_ID, TOAST_REGION_ID};

/// Progressive enhancement for the contact form.
///
/// Without script the form posts natively and the server re-renders the page.
/// With it, the form posts in the background, the button shows the in-flight
/// state, and toasts come from the JSON response.
pub fn contact_form_script() -> String {
    format!(
        r#"<script>
(() => {{
    const form = document.getElementById('{form_id}');
    const region = document.getElementById('{region_id}');
    if (!form || !region) return;
    const button = form.querySelector('button[type="submit"]');
    let inFlight = false;

    const showToasts = (toasts) => {{
        region.replaceChildren();
        for (const t of toasts) {{
            const el = document.createElement('div');
            el.className = 'toast toast-' + t.kind;
            el.setAttribute('role', t.kind === 'error' ? 'alert' : 'status');
            const title = document.createElement('strong');
            title.textContent = t.title;
            const body = document.createElement('p');
            body.textContent = t.description;
            el.append(title, body);
            region.append(el);
            setTimeout(() => el.remove(), 6000);
        }}
    }};

    const setBusy = (busy) => {{
        inFlight = busy;
        button.disabled = busy;
        button.setAttribute('aria-busy', String(busy));
        button.textContent = busy ? 'Sending...' : 'Send Message';
    }};

    form.addEventListener('submit', async (e) => {{
        e.preventDefault();
        if (inFlight) return;
        setBusy(true);
        try {{
            const res = await fetch('{endpoint}', {{
                method: 'POST',
                headers: {{
                    'content-type': 'application/x-www-form-urlencoded',
                    'accept': 'application/json'
                }},
                body: new URLSearchParams(new FormData(form)).toString()
            }});
            const data = await res.json();
            showToasts(data.notifications || []);
            if (data.status === 'sent') form.reset();
        }} catch (err) {{
            showToasts([{{
                kind: 'error',
                title: 'Sending failed',
                description: "We couldn't send your message right now. Please try again."
            }}]);
        }} finally {{
            setBusy(false);
        }}
    }});
}})();
</script>"#,
        form_id = FORM_ID,
        region_id = TOAST_REGION_ID,
        endpoint = CONTACT_API_PATH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_targets_form_and_endpoint() {
        let js = contact_form_script();
        assert!(js.contains("getElementById('contact-form')"));
        assert!(js.contains("getElementById('toast-region')"));
        assert!(js.contains("fetch('/api/contact'"));
        assert!(js.contains("'accept': 'application/json'"));
        assert!(js.contains("if (inFlight) return;"));
    }
}
