pub(super) const INDEX_HTML: &str = r#"<!DOCTYPE html>
  <html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
    <title>Substrate map</title>
    <link
      rel="stylesheet"
      href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"
      integrity="sha256-p4NxAoJBhIIN+hmNHrzRCf9tD/miZyoHS5obTRR9BMY="
      crossorigin=""
    />
    <style>
      html, body { height: 100%; margin: 0; padding: 0; font-family: sans-serif; }
      #substrates-map { position: absolute; top: 0; bottom: 0; left: 0; right: 0; background: #ffffff; }
      #panel {
        position: absolute;
        top: 12px;
        left: 50px;
        z-index: 1100;
        background: white;
        padding: 6px 10px;
        border-radius: 4px;
        box-shadow: 0 1px 4px rgba(0,0,0,0.3);
        max-height: 90%;
        overflow-y: auto;
      }
      #substrate-picker h2 { font-size: 14px; margin: 8px 0 2px 0; }
      #substrate-picker label { display: block; font-size: 13px; line-height: 20px; }
      #legend {
        position: absolute;
        bottom: 16px;
        right: 16px;
        z-index: 1100;
        background: white;
        padding: 6px 10px;
        border-radius: 4px;
        box-shadow: 0 1px 4px rgba(0,0,0,0.3);
      }
      #map-caption { font-weight: bold; }
      #substrates-colorbar img { display: block; margin: 4px 0; }
    </style>
  </head>
  <body>
    <div id="substrates-map"></div>

    <div id="panel">
      <div id="substrate-picker"></div>
    </div>

    <div id="legend">
      <div id="map-caption"></div>
      <div id="substrates-colorbar"></div>
      <div id="map-unit"></div>
    </div>

    <script
      src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"
      integrity="sha256-20nQCchB9co0qIjJZRGuk2/Z9VM+kNiyxNV1lvTlZBo="
      crossorigin=""
    ></script>
    <script src="/script.js"></script>
  </body>
  </html>
"#;

/// Applies server-computed view, background and swap outcomes to Leaflet.
pub(super) const SCRIPT_JS: &str = r#"(function () {
  'use strict';

  const mapEl = document.getElementById('substrates-map');
  const pickerEl = document.getElementById('substrate-picker');
  const colorbarEl = document.getElementById('substrates-colorbar');
  const captionEl = document.getElementById('map-caption');
  const unitEl = document.getElementById('map-unit');

  // url -> L.imageOverlay, one per url for the page lifetime
  const overlays = {};
  let map;
  let session;

  function overlayFor(layer) {
    if (!(layer.url in overlays)) {
      overlays[layer.url] = L.imageOverlay(layer.url, layer.bounds, { pane: layer.pane });
    }
    return overlays[layer.url];
  }

  function applySwap(outcome) {
    outcome.detached.forEach(layer => {
      if (layer.url in overlays) {
        map.removeLayer(overlays[layer.url]);
      }
    });
    map.addLayer(overlayFor(outcome.attached));

    let img = colorbarEl.querySelector('img');
    if (!img) {
      img = document.createElement('img');
      colorbarEl.appendChild(img);
    }
    img.src = outcome.colorbar_url;

    captionEl.textContent = outcome.caption;
    unitEl.innerHTML = outcome.unit_html;
  }

  async function select(key) {
    const res = await fetch(
      `/api/select/${encodeURIComponent(session)}/${encodeURIComponent(key)}`,
      { method: 'POST' }
    );
    if (!res.ok) {
      throw new Error(await res.text());
    }
    applySwap(await res.json());
  }

  async function initMap() {
    const rect = mapEl.getBoundingClientRect();
    const res = await fetch(`/api/view?width=${rect.width}&height=${rect.height}`);
    if (!res.ok) {
      throw new Error(await res.text());
    }
    const view = await res.json();

    map = L.map('substrates-map', {
      minZoom: view.minZoom,
      center: view.center,
      zoom: view.zoom,
      crs: L.CRS.Simple,
      maxBounds: view.maxBounds
    });
    view.panes.forEach(pane => {
      map.createPane(pane.name);
      map.getPane(pane.name).style.zIndex = pane.zIndex;
    });
  }

  async function loadBackground() {
    const res = await fetch('/api/background');
    if (!res.ok) {
      console.warn('Background unavailable:', await res.text());
      return;
    }
    const layers = await res.json();
    [layers.fill, layers.outline].forEach(layer => {
      L.geoJson(layer.data, Object.assign({ pane: layer.pane }, layer.style)).addTo(map);
    });
  }

  async function loadPicker() {
    const res = await fetch('/api/substrates');
    const data = await res.json();
    session = data.session;

    pickerEl.innerHTML = '';
    data.picker.groups.forEach(group => {
      const div = document.createElement('div');
      const h2 = document.createElement('h2');
      h2.textContent = group.heading;
      div.appendChild(h2);

      group.controls.forEach(control => {
        const label = document.createElement('label');
        const input = document.createElement('input');
        input.type = 'radio';
        input.name = control.name;
        input.value = control.key;
        input.checked = control.checked;
        input.addEventListener('change', () => select(control.key).catch(console.error));
        const span = document.createElement('span');
        span.textContent = control.text;
        label.appendChild(input);
        label.appendChild(span);
        div.appendChild(label);
      });

      pickerEl.appendChild(div);
    });

    if (data.current) {
      applySwap(data.current);
    }
  }

  initMap()
    .then(() => Promise.all([
      loadBackground().catch(console.error),
      loadPicker().catch(console.error)
    ]))
    .catch(console.error);
})();
"#;
