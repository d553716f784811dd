/// Single-page dashboard. All state transitions go through `/api/interact`;
/// the page only draws what the server returns.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>SenateGraph</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; display: flex; height: 100vh; overflow: hidden; }
        #canvas { flex: 2; height: 100vh; transition: background 0.3s; }
        #sidebar { flex: 1; min-width: 320px; border-left: 1px solid #333; display: flex; flex-direction: column; background: #fff; }
        .tabs { display: flex; border-bottom: 1px solid #ddd; }
        .tab { flex: 1; padding: 10px; text-align: center; cursor: pointer; color: #666; }
        .tab.active { border-bottom: 3px solid #4a6cf7; color: #111; font-weight: 600; }
        .panel { display: none; flex: 1; overflow-y: auto; padding: 16px; }
        .panel.active { display: block; }
        .control { margin-bottom: 20px; }
        .control label { display: block; font-size: 0.85em; font-weight: 600; margin-bottom: 6px; }
        .control select { width: 100%; min-height: 120px; }
        .range { display: flex; gap: 8px; align-items: center; }
        .range input { flex: 1; }
        #detail h6 { text-align: center; font-size: 0.95em; margin: 6px 0; }
        #detail iframe { width: 100%; border: 0; height: 250px; margin: 10px 0; }
        #error { color: #c0392b; font-size: 0.85em; padding: 8px 16px; display: none; }
    </style>
</head>
<body>
    <div id="canvas"></div>
    <div id="sidebar">
        <div class="tabs">
            <div class="tab active" data-panel="detail-panel">Data</div>
            <div class="tab" data-panel="control-panel">Control Panel</div>
        </div>
        <div id="error"></div>
        <div id="detail-panel" class="panel active"><div id="detail"></div></div>
        <div id="control-panel" class="panel">
            <div class="control">
                <label title="Choose the cutoffs for the % of each Senator's Tweets">% of Tweets about Topic</label>
                <div class="range">
                    <input id="threshold-low" type="range" min="0" max="100" step="5">
                    <input id="threshold-high" type="range" min="0" max="100" step="5">
                    <span id="threshold-text"></span>
                </div>
            </div>
            <div class="control">
                <label>Senators</label>
                <select id="legislator-dropdown" multiple></select>
            </div>
            <div class="control">
                <label>Topics</label>
                <select id="topic-dropdown" multiple></select>
            </div>
            <div class="control">
                <label><input id="color-switch" type="checkbox"> Show Political Parties</label>
            </div>
            <div class="control">
                <label><input id="dark-switch" type="checkbox"> Dark Mode</label>
            </div>
        </div>
    </div>

    <script src="https://unpkg.com/cytoscape@3.28.1/dist/cytoscape.min.js"></script>
    <script>
        let session = null;
        const cy = cytoscape({ container: document.getElementById('canvas') });

        document.querySelectorAll('.tab').forEach(tab => {
            tab.onclick = () => {
                document.querySelectorAll('.tab, .panel').forEach(el => el.classList.remove('active'));
                tab.classList.add('active');
                document.getElementById(tab.dataset.panel).classList.add('active');
            };
        });

        function showError(message) {
            const el = document.getElementById('error');
            el.textContent = message || '';
            el.style.display = message ? 'block' : 'none';
        }

        async function send(event) {
            const res = await fetch('/api/interact', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ session, event }),
            });
            const body = await res.json();
            if (!res.ok) { showError(body.error); return; }
            showError(null);
            session = body.session;
            apply(body.update);
        }

        function apply(update) {
            if (update.elements) {
                const nodes = update.elements.filter(e => e.type !== 'edge');
                const ids = new Set(nodes.map(n => String(n.data.id)));
                // the canvas cannot draw an edge whose endpoint was filtered out
                const edges = update.elements.filter(e =>
                    e.type === 'edge' && ids.has(String(e.data.source)) && ids.has(String(e.data.target)));
                cy.elements().remove();
                cy.add(nodes.map(n => ({ group: 'nodes', data: n.data, position: n.position })));
                cy.add(edges.map(e => ({ group: 'edges', data: e.data })));
            }
            if (update.layout) cy.layout(update.layout).run();
            if (update.stylesheet) cy.style(update.stylesheet);
            if (update.background) document.getElementById('canvas').style.background = update.background;
            if (update.legislators) setSelected('legislator-dropdown', update.legislators);
            if (update.topics) setSelected('topic-dropdown', update.topics);
            if (update.detail) renderDetail(update.detail);
        }

        function setSelected(id, selection) {
            const values = selection === 'all' ? [] : selection.map(String);
            for (const opt of document.getElementById(id).options) opt.selected = values.includes(opt.value);
        }

        function selectedValues(id) {
            return Array.from(document.getElementById(id).selectedOptions).map(o => o.value);
        }

        function heading(text) {
            const h = document.createElement('h6');
            h.textContent = text;
            return h;
        }

        function renderDetail(detail) {
            const el = document.getElementById('detail');
            el.innerHTML = '';
            if (detail.kind === 'topic') {
                el.appendChild(heading(detail.title));
                el.appendChild(heading('Top Keywords: ' + detail.keywords));
            } else if (detail.kind === 'legislator') {
                el.appendChild(heading(detail.title));
            } else {
                [detail.heading, detail.tweet_count, detail.lean, detail.sentiment, detail.subjectivity]
                    .forEach(line => el.appendChild(heading(line)));
                detail.previews.forEach(src => {
                    const frame = document.createElement('iframe');
                    frame.src = src;
                    el.appendChild(frame);
                });
            }
        }

        function fillOptions(id, options) {
            const select = document.getElementById(id);
            options.forEach(o => select.add(new Option(o.label, String(o.value))));
        }

        function syncThreshold() {
            const [low, high] = session.threshold;
            document.getElementById('threshold-low').value = low;
            document.getElementById('threshold-high').value = high;
            document.getElementById('threshold-text').textContent = low + '–' + high;
        }

        async function init() {
            const options = await (await fetch('/api/options')).json();
            fillOptions('legislator-dropdown', options.legislators);
            fillOptions('topic-dropdown', options.topics);

            const res = await fetch('/api/session');
            const body = await res.json();
            if (!res.ok) { showError(body.error); return; }
            session = body.session;
            syncThreshold();
            document.getElementById('color-switch').checked = session.color_by_party;
            document.getElementById('dark-switch').checked = session.dark_mode;
            apply(body.update);
        }

        ['threshold-low', 'threshold-high'].forEach(id => {
            document.getElementById(id).onchange = async () => {
                let low = Number(document.getElementById('threshold-low').value);
                let high = Number(document.getElementById('threshold-high').value);
                if (low > high) [low, high] = [high, low];
                await send({ type: 'threshold', value: [low, high] });
                syncThreshold();
            };
        });
        document.getElementById('legislator-dropdown').onchange = () =>
            send({ type: 'legislators', value: selectedValues('legislator-dropdown') });
        document.getElementById('topic-dropdown').onchange = () =>
            send({ type: 'topics', value: selectedValues('topic-dropdown') });
        document.getElementById('color-switch').onchange = e =>
            send({ type: 'color_by_party', on: e.target.checked });
        document.getElementById('dark-switch').onchange = e =>
            send({ type: 'dark_mode', on: e.target.checked });

        cy.on('tap', 'node', evt => send({
            type: 'tap',
            tap: { kind: 'node', id: evt.target.id(), group: evt.target.data('group') || null },
        }));
        cy.on('tap', 'edge', evt => send({
            type: 'tap',
            tap: Object.assign({ kind: 'edge' }, evt.target.data()),
        }));

        init();
    </script>
</body>
</html>
"#;
